use super::*;

/// Tests if the string expression matches `pattern`.
///
/// One shape covers the four wire operators:
///
/// ```text
/// like(x, p)       // x LIKE p
/// not_like(x, p)   // x NOT LIKE p
/// ilike(x, p)      // x ILIKE p
/// not_ilike(x, p)  // x NOT ILIKE p
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    /// When `true`, the match is negated.
    pub negate: bool,

    /// When `true`, the match is case-insensitive.
    pub case_insensitive: bool,

    pub expr: Box<Expr>,

    pub pattern: Box<Expr>,
}

impl Expr {
    pub fn like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::like_with(expr, pattern, false, false)
    }

    pub fn not_like(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::like_with(expr, pattern, true, false)
    }

    pub fn ilike(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::like_with(expr, pattern, false, true)
    }

    pub fn not_ilike(expr: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        Self::like_with(expr, pattern, true, true)
    }

    fn like_with(
        expr: impl Into<Self>,
        pattern: impl Into<Self>,
        negate: bool,
        case_insensitive: bool,
    ) -> Self {
        ExprLike {
            negate,
            case_insensitive,
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
