//! One-time code entry: six single-digit cells with automatic focus advance.

use crate::shared::error::ApiError;

/// Number of digits in a verification code
pub const OTP_LENGTH: usize = 6;

/// Message shown when the code is incomplete
pub const OTP_LENGTH_MESSAGE: &str = "Please enter the 6-digit OTP.";

/// The six OTP input cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpEntry {
    cells: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl OtpEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the text typed into cell `index`.
    ///
    /// Accepts an empty string (clears the cell) or a single ASCII digit.
    /// Returns false when the input was rejected.
    pub fn input(&mut self, index: usize, text: &str) -> bool {
        if index >= OTP_LENGTH {
            return false;
        }
        let mut chars = text.chars();
        let value = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_digit() => Some(c),
            _ => return false,
        };
        self.cells[index] = value;
        self.focus = index;
        if value.is_some() && index + 1 < OTP_LENGTH {
            self.focus = index + 1;
        }
        true
    }

    /// Apply the edited contents of cell `index`, keeping only the last
    /// character typed so a filled cell can be overwritten in place.
    pub fn retype(&mut self, index: usize, text: &str) -> bool {
        let last = text.trim().chars().last();
        let mut buf = [0u8; 4];
        self.input(index, last.map_or("", |c| &*c.encode_utf8(&mut buf)))
    }

    /// Index of the cell that should hold keyboard focus
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(OTP_LENGTH - 1);
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Filled cells concatenated in order
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The code to submit, or a validation error when it is not six digits long
    pub fn submit_code(&self) -> Result<String, ApiError> {
        let code = self.code();
        if code.chars().count() == OTP_LENGTH {
            Ok(code)
        } else {
            Err(ApiError::validation("otp", OTP_LENGTH_MESSAGE))
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
