/// Result type for application actions.
pub(crate) type Result<T> = std::result::Result<T, AppError>;

/// Errors raised while bringing up the platform subsystems. Once the main
/// loop is entered nothing fails at this level: missing assets degrade.
#[derive(Debug)]
pub enum AppError {
    Sdl(sdl3::Error), // SDL context, video, or event subsystem failure.
    Window(String),   // Window or renderer creation failure.
    Audio(String),    // Audio output device failure.
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Sdl(why) => write!(f, "SDL Error: {why}"),
            AppError::Window(why) => write!(f, "Window Error: {why}"),
            AppError::Audio(why) => write!(f, "Audio Error: {why}"),
        }
    }
}
