/// Length of the number left after the dialing prefix is stripped.
pub const LOCAL_NUMBER_LENGTH: usize = 10;
/// Every Iranian mobile local number starts with this digit.
pub const MOBILE_LEADING_DIGIT: u8 = b'9';
/// Length of the operator code that follows the dialing prefix.
pub const OPERATOR_CODE_LENGTH: usize = 3;

// Characters users commonly put between digit groups. Dash characters,
// white space characters, full stops, slashes, square brackets,
// parentheses and tildes, including full-width variants. Zero width
// non-joiner is included since Persian keyboards insert it freely, and
// so are the direction marks pasted along with right-to-left text.
// This is the body of a regex character class.
pub const VALID_PUNCTUATION: &'static str = "-\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{200C}\u{200E}\u{200F}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\t";

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

pub const ASCII_DIGITS: &'static str = "0-9";
