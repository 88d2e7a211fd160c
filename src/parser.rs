// parser.rs

use crate::error::CalcError;
use crate::ops::Operation;

/// Parse a calculation request of the form `<operation> <num1> <num2>`.
///
/// The format is checked before the operation name: a line with the wrong
/// token count or a non-numeric operand reports `InvalidFormat` even when the
/// first token is also not a known operation.
pub fn parse_request(line: &str) -> Result<(Operation, f64, f64), CalcError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (op, lhs, rhs) = match tokens.as_slice() {
        [op, lhs, rhs] => (*op, *lhs, *rhs),
        _ => return Err(CalcError::InvalidFormat),
    };
    let lhs: f64 = lhs.parse().map_err(|_| CalcError::InvalidFormat)?;
    let rhs: f64 = rhs.parse().map_err(|_| CalcError::InvalidFormat)?;
    let op = op.parse::<Operation>()?;
    Ok((op, lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_parses() {
        assert_eq!(
            parse_request("add 2 3"),
            Ok((Operation::Add, 2.0, 3.0))
        );
        assert_eq!(
            parse_request("  divide   10.5  -2  "),
            Ok((Operation::Divide, 10.5, -2.0))
        );
    }

    #[test]
    fn wrong_token_count_is_a_format_error() {
        assert_eq!(parse_request("multiply 2"), Err(CalcError::InvalidFormat));
        assert_eq!(parse_request("add 1 2 3"), Err(CalcError::InvalidFormat));
        assert_eq!(parse_request(""), Err(CalcError::InvalidFormat));
    }

    #[test]
    fn non_numeric_operand_is_a_format_error() {
        assert_eq!(parse_request("add two 3"), Err(CalcError::InvalidFormat));
        assert_eq!(parse_request("add 2 three"), Err(CalcError::InvalidFormat));
        // Operands are validated before the operation name.
        assert_eq!(parse_request("foo x y"), Err(CalcError::InvalidFormat));
    }

    #[test]
    fn unknown_operation_with_numeric_operands() {
        assert_eq!(
            parse_request("foo 1 2"),
            Err(CalcError::UnknownOperation("foo".to_string()))
        );
    }
}
