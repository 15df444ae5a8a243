//! Arithmetic and concatenation operators.
//!
//! Operators only act on the variant they make sense for: `+ &str` on
//! strings and the arithmetic operators on numbers. Any other variant passes
//! through unchanged, as does a number whose result would overflow or divide
//! by zero.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use rust_decimal::Decimal;

use crate::value::Value;

impl Add<&str> for Value {
    type Output = Value;

    fn add(mut self, suffix: &str) -> Value {
        self += suffix;
        self
    }
}

impl AddAssign<&str> for Value {
    fn add_assign(&mut self, suffix: &str) {
        if let Value::String(s) = self {
            s.push_str(suffix);
        }
    }
}

macro_rules! decimal_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $checked:ident) => {
        impl $assign<Decimal> for Value {
            fn $assign_method(&mut self, rhs: Decimal) {
                if let Value::Number(n) = self {
                    if let Some(result) = n.$checked(rhs) {
                        *n = result;
                    }
                }
            }
        }

        impl $op<Decimal> for Value {
            type Output = Value;

            fn $method(mut self, rhs: Decimal) -> Value {
                <Value as $assign<Decimal>>::$assign_method(&mut self, rhs);
                self
            }
        }
    };
}

decimal_op!(Add, add, AddAssign, add_assign, checked_add);
decimal_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
decimal_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
decimal_op!(Div, div, DivAssign, div_assign, checked_div);
decimal_op!(Rem, rem, RemAssign, rem_assign, checked_rem);

impl Value {
    /// Add one to a number. Other variants are left alone.
    pub fn increment(&mut self) -> &mut Self {
        *self += Decimal::ONE;
        self
    }

    /// Subtract one from a number. Other variants are left alone.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= Decimal::ONE;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_concatenation() {
        assert_eq!(Value::from("ab") + "cd", Value::from("abcd"));
        assert_eq!(Value::from(1) + "cd", Value::from(1));
        let mut value = Value::from("x");
        value += "y";
        assert_eq!(value, Value::from("xy"));
    }

    #[test]
    fn arithmetic_on_numbers() {
        assert_eq!(Value::from(2) + Decimal::ONE, Value::from(3));
        assert_eq!(Value::from(2) - Decimal::TEN, Value::from(-8));
        assert_eq!(Value::from(1.5) * Decimal::TWO, Value::from(3));
        assert_eq!(Value::from(1) / Decimal::from(4), Value::from(0.25));
        assert_eq!(Value::from(7) % Decimal::from(4), Value::from(3));
    }

    #[test]
    fn non_numbers_pass_through() {
        assert_eq!(Value::from("2") + Decimal::ONE, Value::from("2"));
        assert_eq!(Value::Null * Decimal::TWO, Value::Null);
    }

    #[test]
    fn failures_leave_number_unchanged() {
        assert_eq!(Value::from(5) / Decimal::ZERO, Value::from(5));
        assert_eq!(Value::from(5) % Decimal::ZERO, Value::from(5));
        let max = Value::from(Decimal::MAX);
        assert_eq!(max.clone() + Decimal::ONE, max);
    }

    #[test]
    fn increment_and_decrement() {
        let mut value = Value::from(1);
        value.increment().increment();
        assert_eq!(value, Value::from(3));
        value.decrement();
        assert_eq!(value, Value::from(2));

        let mut text = Value::from("a");
        text.increment();
        assert_eq!(text, Value::from("a"));
    }
}
