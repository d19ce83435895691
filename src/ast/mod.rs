//! AST module for the Versa language
//!
//! One closed tagged union, [`Node`], covers every statement and expression
//! form. Children are exclusively owned (`Box`/`Vec`); the tree never shares
//! subtrees. Nodes are built by the parser and only read afterwards.

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// OPERATORS
// ============================================================================

/// Binding strength of unary prefix expressions.
pub const UNARY_PRECEDENCE: u8 = 8;
/// Binding strength of postfix, call and member expressions.
pub const POSTFIX_PRECEDENCE: u8 = 9;
/// Binding strength of literals, identifiers and comments.
pub const ATOM_PRECEDENCE: u8 = 10;

/// Infix operators, including assignment and compound assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    RemAssign,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use BinaryOp::*;
        Some(match symbol {
            "=" => Assign,
            "||" => Or,
            "&&" => And,
            "==" => Eq,
            "!=" => Ne,
            "<" => Lt,
            ">" => Gt,
            "<=" => Le,
            ">=" => Ge,
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "/" => Div,
            "%" => Rem,
            "+=" => AddAssign,
            "-=" => SubAssign,
            "*=" => MulAssign,
            "/=" => DivAssign,
            "%=" => RemAssign,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        use BinaryOp::*;
        match self {
            Assign => "=",
            Or => "||",
            And => "&&",
            Eq => "==",
            Ne => "!=",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Rem => "%",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            RemAssign => "%=",
        }
    }

    /// Higher binds tighter. Compound assignments sit below everything.
    pub fn precedence(self) -> u8 {
        use BinaryOp::*;
        match self {
            AddAssign | SubAssign | MulAssign | DivAssign | RemAssign => 0,
            Assign => 1,
            Or => 2,
            And => 3,
            Eq | Ne => 4,
            Lt | Gt | Le | Ge => 5,
            Add | Sub => 6,
            Mul | Div | Rem => 7,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == BinaryOp::Assign
    }

    /// For a compound assignment, the operator it applies before assigning.
    pub fn compound_base(self) -> Option<Self> {
        use BinaryOp::*;
        match self {
            AddAssign => Some(Add),
            SubAssign => Some(Sub),
            MulAssign => Some(Mul),
            DivAssign => Some(Div),
            RemAssign => Some(Rem),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(UnaryOp::Not),
            "+" => Some(UnaryOp::Plus),
            "-" => Some(UnaryOp::Minus),
            "++" => Some(UnaryOp::Increment),
            "--" => Some(UnaryOp::Decrement),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOp {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl PostfixOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "++" => Some(PostfixOp::Increment),
            "--" => Some(PostfixOp::Decrement),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PostfixOp::Increment => "++",
            PostfixOp::Decrement => "--",
        }
    }
}

impl fmt::Display for PostfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// The AST node for Versa programs.
///
/// Serialized with a `type` tag, so `versa ast` prints objects such as
/// `{"type": "binary", "operator": "+", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Boolean {
        value: bool,
    },
    Number {
        value: String,
    },
    String {
        value: String,
    },
    Identifier {
        name: String,
    },
    Binary {
        operator: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        operator: UnaryOp,
        operand: Box<Node>,
    },
    Postfix {
        operator: PostfixOp,
        operand: Box<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Member {
        object: Box<Node>,
        /// Always an `Identifier` when produced by the parser.
        property: Box<Node>,
    },
    #[serde(rename = "var")]
    VarDecl {
        name: String,
        init: Box<Node>,
    },
    #[serde(rename = "function")]
    FunctionDecl {
        name: String,
        params: Vec<String>,
        body: Vec<Node>,
    },
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        argument: Option<Box<Node>>,
    },
    If {
        test: Box<Node>,
        then: Vec<Node>,
        #[serde(rename = "else", default, skip_serializing_if = "Option::is_none")]
        otherwise: Option<Vec<Node>>,
    },
    While {
        test: Box<Node>,
        body: Vec<Node>,
    },
    Comment {
        text: String,
    },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Node {
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::Number {
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String {
            value: value.into(),
        }
    }

    pub fn binary(operator: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOp, operand: Node) -> Self {
        Node::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn postfix(operator: PostfixOp, operand: Node) -> Self {
        Node::Postfix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn member(object: Node, property: impl Into<String>) -> Self {
        Node::Member {
            object: Box::new(object),
            property: Box::new(Node::identifier(property)),
        }
    }
}

// ============================================================================
// INSPECTION
// ============================================================================

impl Node {
    /// The serialized `type` tag of this node.
    pub fn kind_name(&self) -> &'static str {
        use Node::*;
        match self {
            Boolean { .. } => "boolean",
            Number { .. } => "number",
            String { .. } => "string",
            Identifier { .. } => "identifier",
            Binary { .. } => "binary",
            Unary { .. } => "unary",
            Postfix { .. } => "postfix",
            Call { .. } => "call",
            Member { .. } => "member",
            VarDecl { .. } => "var",
            FunctionDecl { .. } => "function",
            Return { .. } => "return",
            If { .. } => "if",
            While { .. } => "while",
            Comment { .. } => "comment",
        }
    }

    /// Binding strength used when deciding whether to parenthesize.
    pub fn precedence(&self) -> u8 {
        match self {
            Node::Binary { operator, .. } => operator.precedence(),
            Node::Unary { .. } => UNARY_PRECEDENCE,
            Node::Postfix { .. } | Node::Call { .. } | Node::Member { .. } => POSTFIX_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        }
    }

    /// Pretty-prints the node as a compact s-expression, for debugging and tests.
    pub fn pretty(&self) -> std::string::String {
        use Node::*;
        match self {
            Boolean { value } => value.to_string(),
            Number { value } => value.clone(),
            String { value } => format!("{:?}", value),
            Identifier { name } => name.clone(),
            Binary {
                operator,
                left,
                right,
            } => format!("({} {} {})", operator, left.pretty(), right.pretty()),
            Unary { operator, operand } => format!("(unary {} {})", operator, operand.pretty()),
            Postfix { operator, operand } => {
                format!("(postfix {} {})", operator, operand.pretty())
            }
            Call { callee, args } => {
                let mut parts = vec!["call".to_string(), callee.pretty()];
                parts.extend(args.iter().map(Node::pretty));
                format!("({})", parts.join(" "))
            }
            Member { object, property } => {
                format!("(member {} {})", object.pretty(), property.pretty())
            }
            VarDecl { name, init } => format!("(var {} {})", name, init.pretty()),
            FunctionDecl { name, params, body } => format!(
                "(function {} ({}) {})",
                name,
                params.join(" "),
                Self::pretty_block(body)
            ),
            Return { argument: None } => "(return)".to_string(),
            Return {
                argument: Some(argument),
            } => format!("(return {})", argument.pretty()),
            If {
                test,
                then,
                otherwise,
            } => match otherwise {
                Some(otherwise) => format!(
                    "(if {} {} {})",
                    test.pretty(),
                    Self::pretty_block(then),
                    Self::pretty_block(otherwise)
                ),
                None => format!("(if {} {})", test.pretty(), Self::pretty_block(then)),
            },
            While { test, body } => {
                format!("(while {} {})", test.pretty(), Self::pretty_block(body))
            }
            Comment { text } => format!("(comment {:?})", text),
        }
    }

    fn pretty_block(nodes: &[Node]) -> std::string::String {
        let inner = nodes.iter().map(Node::pretty).collect::<Vec<_>>().join(" ");
        format!("[{}]", inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_operators_bind_loosest() {
        assert_eq!(BinaryOp::AddAssign.precedence(), 0);
        assert!(BinaryOp::Assign.precedence() < BinaryOp::Or.precedence());
        assert_eq!(BinaryOp::RemAssign.compound_base(), Some(BinaryOp::Rem));
        assert_eq!(BinaryOp::Add.compound_base(), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let node = Node::binary(BinaryOp::Add, Node::number("1"), Node::identifier("x"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "binary");
        assert_eq!(json["operator"], "+");
        assert_eq!(json["left"]["type"], "number");
    }

    #[test]
    fn pretty_nests_postfix_chains() {
        let node = Node::postfix(
            PostfixOp::Increment,
            Node::member(Node::call(Node::identifier("f"), vec![Node::identifier("x")]), "y"),
        );
        assert_eq!(node.pretty(), "(postfix ++ (member (call f x) y))");
    }
}
