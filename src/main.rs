fn main() {
    versa::cli::run();
}
