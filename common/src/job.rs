use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One posting as it appears in the source document.
///
/// The listing text fields used for filtering are required; a record
/// without them is rejected while loading instead of failing later when
/// the list is filtered or rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub experience: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub benefits: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub company_url: Option<String>,
    #[serde(
        default,
        rename = "companyImageUrl",
        deserialize_with = "deserialize_optional_text"
    )]
    pub company_image_url: Option<String>,
    pub job_link: String,
    pub source: String,
    #[serde(rename = "postedDateTime", deserialize_with = "deserialize_posted_date")]
    pub posted_at: DateTime<Utc>,
    #[serde(
        default,
        rename = "companytype",
        deserialize_with = "deserialize_optional_text"
    )]
    pub company_type: Option<String>,
}

/// A loaded posting with its synthetic identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub experience: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub salary: Option<String>,
    pub company_url: Option<String>,
    #[serde(rename = "companyImageUrl")]
    pub company_image_url: Option<String>,
    pub job_link: String,
    pub source: String,
    #[serde(rename = "postedDateTime")]
    pub posted_at: DateTime<Utc>,
    #[serde(rename = "companytype")]
    pub company_type: Option<String>,
}

impl Job {
    pub fn from_record(id: impl Into<String>, record: JobRecord) -> Self {
        Self {
            id: id.into(),
            title: record.title,
            company: record.company,
            location: record.location,
            employment_type: record.employment_type,
            experience: record.experience,
            description: record.description,
            requirements: record.requirements,
            benefits: record.benefits,
            salary: record.salary,
            company_url: record.company_url,
            company_image_url: record.company_image_url,
            job_link: record.job_link,
            source: record.source,
            posted_at: record.posted_at,
            company_type: record.company_type,
        }
    }

    /// Posting date the way a US locale prints a short date (`M/D/YYYY`).
    pub fn posted_on(&self) -> String {
        self.posted_at.format("%-m/%-d/%Y").to_string()
    }
}

/// Returns the value of an optional text field if it has visible content.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

/// Accepts strings, numbers and booleans for optional text fields
/// (salary is sometimes published as a bare number). Lists of strings are
/// joined one per line; any other shape is dropped.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListItem {
        String(String),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
        List(Vec<ListItem>),
        Other(IgnoredAny),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.and_then(|text| match text {
        Text::String(s) => Some(s),
        Text::Integer(i) => Some(i.to_string()),
        Text::Float(f) => Some(f.to_string()),
        Text::Bool(b) => Some(b.to_string()),
        Text::List(items) => {
            let lines: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    ListItem::String(s) => Some(s),
                    ListItem::Other(_) => None,
                })
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        Text::Other(_) => None,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateValue {
    Text(String),
    Millis(i64),
    FractionalMillis(f64),
    NumberLong {
        #[serde(rename = "$numberLong")]
        millis: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PostedDate {
    Extended {
        #[serde(rename = "$date")]
        date: DateValue,
    },
    Plain(DateValue),
}

/// Reads `postedDateTime` from MongoDB extended JSON or a bare value.
fn deserialize_posted_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match PostedDate::deserialize(deserializer)? {
        PostedDate::Extended { date } => date,
        PostedDate::Plain(date) => date,
    };
    date_from_value(value).map_err(serde::de::Error::custom)
}

fn date_from_value(value: DateValue) -> Result<DateTime<Utc>, String> {
    match value {
        DateValue::Text(text) => parse_date_text(&text),
        DateValue::Millis(millis) => from_millis(millis),
        DateValue::FractionalMillis(millis) => from_millis(millis.trunc() as i64),
        DateValue::NumberLong { millis } => millis
            .parse::<i64>()
            .map_err(|e| format!("invalid $numberLong {:?}: {}", millis, e))
            .and_then(from_millis),
    }
}

fn parse_date_text(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }
    // Timestamps without an offset are taken as UTC
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("invalid postedDateTime {:?}", text))
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| format!("postedDateTime out of range: {}", millis))
}
