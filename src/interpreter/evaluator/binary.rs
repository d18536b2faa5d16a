use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::Value},
};

/// Applies an equality operator to an already-computed comparison result.
fn equality_result(op: BinaryOperator, is_equal: bool) -> Value {
    match op {
        BinaryOperator::Equal => Value::Bool(is_equal),
        _ => Value::Bool(!is_equal),
    }
}

impl Context {
    /// Evaluates a binary operation on two values.
    ///
    /// Operands are never coerced across types. Each operator family has its
    /// own compatibility rule, and every combination outside those rules
    /// evaluates to `Nil` rather than an error.
    ///
    /// # Parameters
    /// - `op`: The binary operator to apply.
    /// - `left`: The evaluated left operand.
    /// - `right`: The evaluated right operand.
    ///
    /// # Returns
    /// The resulting [`Value`].
    ///
    /// # Example
    /// ```
    /// use genscript::ast::BinaryOperator;
    /// use genscript::interpreter::evaluator::core::Context;
    /// use genscript::interpreter::value::Value;
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Plus,
    ///                                &Value::Number(3.0),
    ///                                &Value::Number(4.0));
    /// assert_eq!(sum, Value::Number(7.0));
    ///
    /// let mismatch = Context::eval_binary(BinaryOperator::Equal,
    ///                                     &Value::Number(1.0),
    ///                                     &Value::String("1".to_string()));
    /// assert_eq!(mismatch, Value::Nil);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOperator::Or | BinaryOperator::And => Self::eval_logic(op, left, right),
            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                Self::eval_equality(op, left, right)
            },
            BinaryOperator::Lower
            | BinaryOperator::Greater
            | BinaryOperator::LowerEqual
            | BinaryOperator::GreaterEqual => Self::eval_ordering(op, left, right),
            BinaryOperator::Plus
            | BinaryOperator::Minus
            | BinaryOperator::Mult
            | BinaryOperator::Div => Self::eval_arithmetic(op, left, right),
            BinaryOperator::Mod => Self::eval_modulo(left, right),
        }
    }

    /// Evaluates `or` and `and`.
    ///
    /// Both operands must be booleans; any other combination yields `Nil`.
    /// The operators do not short-circuit, both operands are evaluated
    /// before this function is called.
    fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Bool(l), Value::Bool(r)) => {
                match op {
                    BinaryOperator::Or => Value::Bool(*l || *r),
                    _ => Value::Bool(*l && *r),
                }
            },
            _ => Value::Nil,
        }
    }

    /// Evaluates `==` and `!=`.
    ///
    /// Only like-typed booleans, numbers and strings compare; everything
    /// else, including two `Nil` operands, yields `Nil`.
    fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let is_equal = match (left, right) {
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            _ => return Value::Nil,
        };
        equality_result(op, is_equal)
    }

    /// Evaluates `<`, `>`, `<=` and `>=`.
    ///
    /// Numbers order numerically and strings lexicographically; mixed
    /// operand types yield `Nil`.
    fn eval_ordering(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => {
                Value::Bool(match op {
                                BinaryOperator::Lower => l < r,
                                BinaryOperator::Greater => l > r,
                                BinaryOperator::LowerEqual => l <= r,
                                _ => l >= r,
                            })
            },
            (Value::String(l), Value::String(r)) => {
                Value::Bool(match op {
                                BinaryOperator::Lower => l < r,
                                BinaryOperator::Greater => l > r,
                                BinaryOperator::LowerEqual => l <= r,
                                _ => l >= r,
                            })
            },
            _ => Value::Nil,
        }
    }

    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// Two numbers apply the operator; `+` additionally concatenates two
    /// strings. A number or, for `+`, string left operand paired with a
    /// mismatched right operand passes through unchanged. Any other left
    /// operand yields `Nil`.
    fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => {
                Value::Number(match op {
                                  BinaryOperator::Plus => l + r,
                                  BinaryOperator::Minus => l - r,
                                  BinaryOperator::Mult => l * r,
                                  _ => l / r,
                              })
            },
            (Value::Number(_), _) => left.clone(),
            (Value::String(l), Value::String(r)) if op == BinaryOperator::Plus => {
                Value::String(format!("{l}{r}"))
            },
            (Value::String(_), _) if op == BinaryOperator::Plus => left.clone(),
            _ => Value::Nil,
        }
    }

    /// Evaluates `%`.
    ///
    /// Both operands truncate to integers before the remainder is taken, so
    /// `5.9 % 3.9` is `2`. A zero divisor yields `Nil`; a number left
    /// operand with a non-number right passes through unchanged.
    fn eval_modulo(left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => {
                let divisor = *r as i64;
                if divisor == 0 {
                    Value::Nil
                } else {
                    Value::Number(((*l as i64) % divisor) as f64)
                }
            },
            (Value::Number(_), _) => left.clone(),
            _ => Value::Nil,
        }
    }
}
