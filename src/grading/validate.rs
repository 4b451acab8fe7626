use serde_json::Value;

/// Lowest admissible grade.
pub const GRADE_MIN: f64 = 0.0;
/// Highest admissible grade.
pub const GRADE_MAX: f64 = 10.0;

/// A value that may or may not be interpretable as a floating-point grade.
///
/// Returning `None` means interpretation failed: the value is absent, is
/// non-numeric text, or is not a scalar at all.
pub trait AsGrade {
    fn as_grade(&self) -> Option<f64>;
}

macro_rules! numeric_as_grade {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsGrade for $ty {
                fn as_grade(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_as_grade!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AsGrade for str {
    fn as_grade(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl AsGrade for String {
    fn as_grade(&self) -> Option<f64> {
        self.as_str().as_grade()
    }
}

impl<T: AsGrade> AsGrade for Option<T> {
    fn as_grade(&self) -> Option<f64> {
        self.as_ref().and_then(AsGrade::as_grade)
    }
}

impl<T: AsGrade + ?Sized> AsGrade for &T {
    fn as_grade(&self) -> Option<f64> {
        (**self).as_grade()
    }
}

impl AsGrade for Value {
    fn as_grade(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.as_grade(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Interprets `value` and returns it only if it lies in `[GRADE_MIN, GRADE_MAX]`.
pub fn admissible_grade<T: AsGrade + ?Sized>(value: &T) -> Option<f64> {
    value
        .as_grade()
        .filter(|grade| (GRADE_MIN..=GRADE_MAX).contains(grade))
}

/// Returns `true` if `value` reads as a number in `[0, 10]`, bounds included.
///
/// Never panics: anything that fails numeric interpretation is simply not
/// admissible.
pub fn is_admissible<T: AsGrade + ?Sized>(value: &T) -> bool {
    admissible_grade(value).is_some()
}
