use super::field::Field;

/// The in-memory registration record being edited or displayed.
///
/// All values are plain text. The record carries no validation state of its
/// own; see [`validate`](super::validate) for the derived errors map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub country_code: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhaar: String,
}

impl Record {
    /// Creates a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::CountryCode => &self.country_code,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhaar => &self.aadhaar,
        }
    }

    /// Overwrites the value of `field`. Fields update independently.
    pub fn set(&mut self, field: Field, value: String) {
        *self.get_mut(field) = value;
    }

    /// Appends a character to the value of `field`.
    pub fn push(&mut self, field: Field, ch: char) {
        self.get_mut(field).push(ch);
    }

    /// Deletes the last character of `field`, if any.
    pub fn pop(&mut self, field: Field) {
        self.get_mut(field).pop();
    }

    /// All (field, value) pairs in declaration order.
    pub fn entries(&self) -> [(Field, &str); 11] {
        Field::ALL.map(|field| (field, self.get(field)))
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Phone => &mut self.phone,
            Field::CountryCode => &mut self.country_code,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhaar => &mut self.aadhaar,
        }
    }
}
