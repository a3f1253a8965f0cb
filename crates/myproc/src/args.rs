use std::path::PathBuf;

use myproc_imgproc::filter::kernels::MAX_GAUSSIAN_SIGMA;

/// Gaussian sigma used when `-sigma` is not given.
pub const DEFAULT_SIGMA: f64 = 1.5;

/// Fixed binarization threshold used when `-th` is not given.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Help text of the `myproc` binary.
pub const USAGE: &str = "\
MyProc - simple CLI image processor

Usage:
  myproc -op blur -sigma 2 -in <input> -out <output>
  myproc -op edge              -in <input> -out <output>
  myproc -op bin  [-th 128] [-otsu] [-inv] -in <input> -out <output>

Options:
  -op <blur|edge|bin>
  -sigma <float>   (blur) Gaussian sigma, 0 < sigma <= 1000 (default 1.5)
  -th <0..255>     (bin)  fixed threshold, a whole number (default 128)
  -otsu            (bin)  use Otsu's method (ignore -th)
  -inv             (bin)  invert output (black/white swap)
  -in <path>       input image file (png/jpg/bmp/tif...)
  -out <path>      output image file, format chosen by extension
  -h, --help       print this help
";

/// An error type for the command line arguments.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArgsError {
    /// A required option is absent or has an empty value.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The `-op` value names no known operation.
    #[error("Unsupported -op: {0}")]
    UnsupportedOperation(String),

    /// A numeric option does not parse or is out of range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// The offending option.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ArgsError {
    /// Whether the usage text should accompany this error.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            ArgsError::MissingArgument(_) | ArgsError::UnsupportedOperation(_)
        )
    }
}

/// How the binarization threshold is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Threshold {
    /// A user supplied level.
    Fixed(u8),
    /// The level computed by Otsu's method.
    Otsu,
}

/// The transform to apply, carrying only the parameters it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    /// Gaussian smoothing of a 3 channel image.
    Blur {
        /// The gaussian sigma, positive and finite.
        sigma: f64,
    },
    /// Canny edge detection on the luminance.
    Edge,
    /// Binary thresholding of the luminance.
    Binarize {
        /// The threshold selection.
        threshold: Threshold,
        /// Swap black and white in the output.
        invert: bool,
    },
}

impl Operation {
    /// The `-op` keyword of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Blur { .. } => "blur",
            Operation::Edge => "edge",
            Operation::Binarize { .. } => "bin",
        }
    }
}

/// A validated run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The transform to apply.
    pub operation: Operation,
    /// The image to read.
    pub input: PathBuf,
    /// The image to write.
    pub output: PathBuf,
}

/// Flat view over the raw tokens.
///
/// Keyed options take the token right after them; the first occurrence that has a
/// following token wins. Flags only need to be present.
struct OptionTable<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> OptionTable<'a> {
    fn new<S: AsRef<str>>(args: &'a [S]) -> Self {
        Self {
            tokens: args.iter().map(|a| a.as_ref()).collect(),
        }
    }

    fn has(&self, key: &str) -> bool {
        self.tokens.iter().any(|t| *t == key)
    }

    fn value(&self, key: &str) -> Option<&'a str> {
        self.tokens
            .windows(2)
            .find(|pair| pair[0] == key)
            .map(|pair| pair[1])
    }

    fn required(&self, key: &'static str) -> Result<&'a str, ArgsError> {
        match self.value(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ArgsError::MissingArgument(key)),
        }
    }

    fn number<T: std::str::FromStr>(&self, key: &'static str) -> Result<Option<T>, ArgsError> {
        if !self.has(key) {
            return Ok(None);
        }

        let value = self.value(key).ok_or_else(|| ArgsError::InvalidParameter {
            name: key,
            reason: "missing value".to_string(),
        })?;

        value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ArgsError::InvalidParameter {
                name: key,
                reason: format!("'{value}' is not a number"),
            })
    }
}

/// Options that take the following token as their value.
const KEYED_OPTIONS: [&str; 5] = ["-op", "-in", "-out", "-sigma", "-th"];

/// Returns true when the arguments ask for the help text.
///
/// A help flag in value position, as in `-in -help`, is a value and not a request.
pub fn wants_help<S: AsRef<str>>(args: &[S]) -> bool {
    let mut tokens = args.iter().map(|a| a.as_ref());
    while let Some(token) = tokens.next() {
        if KEYED_OPTIONS.contains(&token) {
            tokens.next();
        } else if matches!(token, "-h" | "-help" | "--help") {
            return true;
        }
    }
    false
}

/// Parse the raw arguments, program name excluded, into a [`Config`].
///
/// # Errors
///
/// * [`ArgsError::MissingArgument`] when `-op`, `-in` or `-out` is absent or empty.
/// * [`ArgsError::UnsupportedOperation`] when `-op` is not `blur`, `edge` or `bin`.
/// * [`ArgsError::InvalidParameter`] when `-sigma` or `-th` does not parse, when
///   the blur sigma is not positive, or when the fixed threshold is outside `0..=255`.
///
/// # Example
///
/// ```
/// use myproc::args::{parse_args, Operation, Threshold};
///
/// let config = parse_args(&["-op", "bin", "-th", "90", "-inv", "-in", "a.png", "-out", "b.png"]).unwrap();
///
/// assert_eq!(
///     config.operation,
///     Operation::Binarize { threshold: Threshold::Fixed(90), invert: true }
/// );
/// ```
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Config, ArgsError> {
    let table = OptionTable::new(args);

    let op = table.required("-op")?;
    let input = table.required("-in")?;
    let output = table.required("-out")?;

    if !matches!(op, "blur" | "edge" | "bin") {
        return Err(ArgsError::UnsupportedOperation(op.to_string()));
    }

    let sigma = table.number::<f64>("-sigma")?.unwrap_or(DEFAULT_SIGMA);
    let th = table
        .number::<i64>("-th")?
        .unwrap_or(i64::from(DEFAULT_THRESHOLD));
    let otsu = table.has("-otsu");
    let invert = table.has("-inv");

    let operation = match op {
        "blur" => {
            if !(sigma > 0.0 && sigma <= MAX_GAUSSIAN_SIGMA) {
                return Err(ArgsError::InvalidParameter {
                    name: "-sigma",
                    reason: format!("sigma must be in (0, {MAX_GAUSSIAN_SIGMA}], got {sigma}"),
                });
            }
            Operation::Blur { sigma }
        }
        "edge" => Operation::Edge,
        _ => {
            let threshold = if otsu {
                Threshold::Otsu
            } else {
                let level = u8::try_from(th).map_err(|_| ArgsError::InvalidParameter {
                    name: "-th",
                    reason: format!("threshold must be 0..255, got {th}"),
                })?;
                Threshold::Fixed(level)
            };
            Operation::Binarize { threshold, invert }
        }
    };

    Ok(Config {
        operation,
        input: PathBuf::from(input),
        output: PathBuf::from(output),
    })
}
