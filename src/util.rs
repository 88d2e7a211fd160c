// util.rs

/// Render a float the way the calculator prints it: values with no
/// fractional part keep one decimal place ("5" becomes "5.0"), everything
/// else uses the default rendering.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
