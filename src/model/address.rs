//! Sender labels and address splitting for list and viewer headers.

/// Derive the short, human-facing label of a `From` header value.
///
/// The value is split at the first `<`. A non-empty display part (trailing
/// whitespace removed) is title-cased; otherwise the input is returned as-is.
///
/// # Examples
/// - `"John Smith <john@x.com>"` → `"John Smith"`
/// - `"<jane@x.com>"` → `"<jane@x.com>"`
/// - `"jane@x.com"` → `"Jane@x.com"`
pub fn sender_label(raw: &str) -> String {
    let display = raw.split('<').next().unwrap_or("").trim_end();
    if display.is_empty() {
        raw.to_string()
    } else {
        title_case(display)
    }
}

/// Uppercase the first character of every whitespace-delimited token.
///
/// The remaining characters keep their case: `"mcDonald"` → `"McDonald"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_token_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_token_start = true;
            out.push(ch);
        } else if at_token_start {
            at_token_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// A parsed email address.
///
/// # Examples
/// - `"Juan García <juan@ejemplo.com>"` → `display_name = "Juan García"`, `address = "juan@ejemplo.com"`
/// - `"user@example.com"` → `display_name = ""`, `address = "user@example.com"`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    /// Human-readable display name (may be empty).
    pub display_name: String,
    /// The bare email address (`user@domain`).
    pub address: String,
}

impl EmailAddress {
    /// Parse a single address from a header value.
    ///
    /// Supported formats:
    /// - `"user@domain.com"`
    /// - `"<user@domain.com>"`
    /// - `"Display Name <user@domain.com>"`
    /// - `"\"Display, Name\" <user@domain.com>"`
    ///
    /// Anything else is stored as-is in `address`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let (Some(angle_start), Some(angle_end)) = (trimmed.rfind('<'), trimmed.rfind('>')) {
            if angle_end > angle_start {
                return Self {
                    display_name: strip_quotes(&trimmed[..angle_start]),
                    address: trimmed[angle_start + 1..angle_end].trim().to_string(),
                };
            }
        }

        Self {
            display_name: String::new(),
            address: trimmed.to_string(),
        }
    }

    /// Viewer header form: `"Title Cased Name (address)"`, or just the address
    /// when there is no display name.
    pub fn format(&self) -> String {
        format_address(&self.display_name, &self.address)
    }
}

/// See [`EmailAddress::format`].
pub fn format_address(name: &str, address: &str) -> String {
    if name.is_empty() {
        address.to_string()
    } else {
        format!("{} ({address})", title_case(name))
    }
}

/// Strip surrounding double-quotes and trim whitespace.
fn strip_quotes(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
