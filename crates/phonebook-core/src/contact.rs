// crates/phonebook-core/src/contact.rs - Contact records and search criteria
//
// A contact is one line of the phone book file: six comma-separated fields in
// a fixed order. The store never requires a line to be well-formed, so most
// of this module works on raw `&str` lines; `Contact` is the strict, typed
// view used for structured output.
//
// FIELD ORDER:
// 0 surname, 1 given name, 2 patronymic, 3 organization,
// 4 work phone, 5 personal phone

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fields in a well-formed contact line
pub const FIELD_COUNT: usize = 6;

/// Separator between fields in a contact line
pub const FIELD_SEPARATOR: char = ',';

/// Errors that can occur while interpreting contacts and search terms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Invalid field '{0}'. Expected one of: {valid}", valid = Field::valid_keys())]
    InvalidField(String),

    #[error("Malformed search criterion '{0}': expected field=value")]
    MalformedCriterion(String),

    #[error("Expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

/// Result type for contact operations
pub type ContactResult<T> = Result<T, ContactError>;

/// One column of a contact line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Surname,
    GivenName,
    Patronymic,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Surname,
        Field::GivenName,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Column index of this field within a contact line
    pub fn index(self) -> usize {
        match self {
            Self::Surname => 0,
            Self::GivenName => 1,
            Self::Patronymic => 2,
            Self::Organization => 3,
            Self::WorkPhone => 4,
            Self::PersonalPhone => 5,
        }
    }

    /// Canonical search key, as typed on the command line
    pub fn key(self) -> &'static str {
        match self {
            Self::Surname => "фамилия",
            Self::GivenName => "имя",
            Self::Patronymic => "отчество",
            Self::Organization => "организация",
            Self::WorkPhone => "рабочий",
            Self::PersonalPhone => "личный",
        }
    }

    /// Extract this field's trimmed value from a raw line
    ///
    /// Returns `None` when the line has too few fields.
    pub fn extract(self, line: &str) -> Option<&str> {
        line.trim()
            .split(FIELD_SEPARATOR)
            .nth(self.index())
            .map(str::trim)
    }

    fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|field| field.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ContactError;

    fn from_str(s: &str) -> ContactResult<Self> {
        let key = s.trim().to_lowercase();
        let field = match key.as_str() {
            "фамилия" | "surname" => Self::Surname,
            "имя" | "name" | "given_name" => Self::GivenName,
            "отчество" | "patronymic" => Self::Patronymic,
            "организация" | "organization" | "org" => Self::Organization,
            "рабочий" | "work" | "work_phone" => Self::WorkPhone,
            "личный" | "personal" | "personal_phone" => Self::PersonalPhone,
            _ => return Err(ContactError::InvalidField(s.to_string())),
        };
        Ok(field)
    }
}

/// A well-formed contact with all six fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub surname: String,
    pub given_name: String,
    pub patronymic: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl Contact {
    /// Parse a line that must contain exactly six fields
    ///
    /// Each field is trimmed. Lines with any other field count are rejected
    /// with [`ContactError::FieldCount`].
    pub fn parse_line(line: &str) -> ContactResult<Self> {
        let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
        let [surname, given_name, patronymic, organization, work_phone, personal_phone] =
            parts.as_slice()
        else {
            return Err(ContactError::FieldCount {
                expected: FIELD_COUNT,
                found: parts.len(),
            });
        };

        Ok(Self {
            surname: surname.to_string(),
            given_name: given_name.to_string(),
            patronymic: patronymic.to_string(),
            organization: organization.to_string(),
            work_phone: work_phone.to_string(),
            personal_phone: personal_phone.to_string(),
        })
    }

    /// Value of a single field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::GivenName => &self.given_name,
            Field::Patronymic => &self.patronymic,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    /// Serialize back to the on-disk line format (no trailing newline)
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in Field::ALL {
            if !first {
                write!(f, "{}", FIELD_SEPARATOR)?;
            }
            first = false;
            f.write_str(self.field(field))?;
        }
        Ok(())
    }
}

/// Field-based search criteria with AND semantics
///
/// Behaves like a dictionary: inserting a field twice keeps the later value,
/// while iteration follows first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    terms: IndexMap<Field, String>,
}

impl SearchCriteria {
    /// Empty criteria (matches every line)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace the expected value for a field
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.terms.insert(field, value.into());
    }

    /// Parse a single `field=value` term
    ///
    /// Splits on the first `=` so values may themselves contain `=`.
    /// The value is kept verbatim; only the key is normalized.
    pub fn parse_term(term: &str) -> ContactResult<(Field, String)> {
        let (key, value) = term
            .split_once('=')
            .ok_or_else(|| ContactError::MalformedCriterion(term.to_string()))?;
        let field = key.parse::<Field>()?;
        Ok((field, value.to_string()))
    }

    /// Parse a list of `field=value` terms
    pub fn from_terms<I, S>(terms: I) -> ContactResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut criteria = Self::new();
        for term in terms {
            let (field, value) = Self::parse_term(term.as_ref())?;
            criteria.insert(field, value);
        }
        Ok(criteria)
    }

    /// Whether a raw line satisfies every criterion
    ///
    /// A line missing the column for some criterion does not match.
    pub fn matches(&self, line: &str) -> bool {
        self.terms
            .iter()
            .all(|(field, expected)| field.extract(line) == Some(expected.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.terms.iter().map(|(field, value)| (*field, value.as_str()))
    }
}
