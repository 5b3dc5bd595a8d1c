/// Converts the text of a single sentence field into `$ty`.
/// A failed conversion is tagged with `$field` so the caller knows which
/// field of the sentence was malformed.
macro_rules! convert {
    ($text:expr, $field:expr, f64) => {
        $text
            .parse::<f64>()
            .map_err(|e| $crate::err::ParseError::Float($field, e))
    };
    ($text:expr, $field:expr, $int:ty) => {
        $text
            .parse::<$int>()
            .map_err(|e| $crate::err::ParseError::Int($field, e))
    };
}

/// Like `convert!`, but an empty field yields `Ok(None)` instead of an error.
macro_rules! convert_opt {
    ($text:expr, $field:expr, $ty:tt) => {
        match $text {
            "" => Ok(None),
            text => convert!(text, $field, $ty).map(Some),
        }
    };
}
