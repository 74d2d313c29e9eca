/// The eleven registration fields, in the record's natural order.
///
/// Declaration order drives focus traversal on the entry screen and the
/// row order on the summary screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    CountryCode,
    Country,
    City,
    Pan,
    Aadhaar,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::Phone,
        Field::CountryCode,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhaar,
    ];

    /// Human-readable label, used by both the entry form and the summary rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Phone => "Phone",
            Self::CountryCode => "Country Code",
            Self::Country => "Country",
            Self::City => "City",
            Self::Pan => "PAN",
            Self::Aadhaar => "Aadhaar",
        }
    }

    /// Whether the field is rendered masked on the entry screen.
    ///
    /// Only affects display; the stored value is always plain text, and the
    /// summary screen shows every field unmasked.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}
