//! Errors raised while assembling render parameters.  The numeric core
//! itself never fails; these only guard the way in.

/// A render parameter outside the range the renderer is defined for.
#[derive(Debug, Fail, PartialEq)]
pub enum ParameterError {
    /// The iteration bound was zero.
    #[fail(display = "The iteration bound must be at least 1")]
    NoIterations,

    /// The zoom factor was zero, negative, or not a number.
    #[fail(display = "The zoom factor must be a positive number, got {}", _0)]
    BadZoom(f64),

    /// One of the canvas dimensions was zero.
    #[fail(display = "The canvas must have a positive size, got {}x{}", _0, _1)]
    EmptyCanvas(usize, usize),
}

/// A preset lookup that matched nothing in the registry.
#[derive(Debug, Fail, PartialEq)]
pub enum PresetError {
    /// No preset carries the given name.
    #[fail(display = "No preset named '{}'", _0)]
    Unknown(String),
}
