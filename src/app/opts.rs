/// Options for a session, populated from the command line.
pub(crate) struct Options {
    pub image_path: Option<String>, // Image to overlay on top of the rectangle.
    pub audio_path: Option<String>, // Sound to play when the rectangle bounces.
    pub show_help: bool,            // Print usage and exit instead of running.
}

impl Options {
    /// Parses command-line arguments, program name excluded. Unrecognized
    /// arguments are ignored, and a flag with no following value behaves as
    /// if the flag were absent. Help short-circuits the rest of the line.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self {
            image_path: None,
            audio_path: None,
            show_help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    opts.show_help = true;
                    break;
                }
                "-i" | "--image" => opts.image_path = args.next(),
                "-a" | "--audio" => opts.audio_path = args.next(),
                _ => (),
            }
        }

        opts
    }

    /// Usage text printed for `-h` / `--help`.
    pub fn usage(program: &str) -> String {
        format!(
            "Usage: {program} -i [IMAGE_FILE] -a [WAV_FILE]\n\
             \t-h, --help \tShow this help text.\n\
             \t-i, --image\tLoad an image to overlay on top of the rectangle.\n\
             \t-a, --audio\tLoad a wav file to play when the rectangle bounces.\n"
        )
    }
}
