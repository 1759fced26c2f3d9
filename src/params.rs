//! Enumerated query parameters
//!
//! The API only accepts a handful of values for its enum-like parameters.
//! Modelling them as Rust enums makes invalid values unrepresentable; parsing
//! from text (e.g. command line input) rejects unknown values before any
//! request is made.

use crate::client::{ApiError, Params};
use std::fmt;
use std::str::FromStr;

/// Sort direction for episode listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub const CHOICES: &'static [&'static str] = &["ASC", "DESC"];

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }

    pub(crate) fn to_params(self) -> Params {
        vec![("order", self.as_str().to_string())]
    }
}

/// Sort key for show listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShowSortBy {
    #[default]
    LastEpisode,
}

impl ShowSortBy {
    pub const CHOICES: &'static [&'static str] = &["LastEpisode"];

    pub fn as_str(self) -> &'static str {
        match self {
            ShowSortBy::LastEpisode => "LastEpisode",
        }
    }
}

/// Restricts show listings to a subset of shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFilter {
    Podcast,
}

impl ShowFilter {
    pub const CHOICES: &'static [&'static str] = &["podcast"];

    pub fn as_str(self) -> &'static str {
        match self {
            ShowFilter::Podcast => "podcast",
        }
    }
}

/// Query parameters shared by all show listings. `only` is left out entirely
/// when no filter is requested.
pub(crate) fn show_list_params(sortby: ShowSortBy, only: Option<ShowFilter>) -> Params {
    let mut params: Params = vec![("sortby", sortby.as_str().to_string())];
    if let Some(filter) = only {
        params.push(("only", filter.as_str().to_string()));
    }
    params
}

/// Looks up `value` among `choices`, ignoring ASCII case.
fn parse_choice(
    parameter: &'static str,
    value: &str,
    choices: &'static [&'static str],
) -> Result<usize, ApiError> {
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(value))
        .ok_or_else(|| ApiError::InvalidChoice {
            parameter,
            value: value.to_string(),
            choices,
        })
}

impl FromStr for Order {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_choice("order", s, Self::CHOICES)? {
            0 => Ok(Order::Asc),
            _ => Ok(Order::Desc),
        }
    }
}

impl FromStr for ShowSortBy {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("sortby", s, Self::CHOICES).map(|_| ShowSortBy::LastEpisode)
    }
}

impl FromStr for ShowFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("only", s, Self::CHOICES).map(|_| ShowFilter::Podcast)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShowSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!("ASC".parse::<Order>().unwrap(), Order::Asc);
        assert_eq!("desc".parse::<Order>().unwrap(), Order::Desc);
        assert_eq!(Order::default(), Order::Asc);
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let err = "sideways".parse::<Order>().unwrap_err();
        match err {
            ApiError::InvalidChoice {
                parameter,
                value,
                choices,
            } => {
                assert_eq!(parameter, "order");
                assert_eq!(value, "sideways");
                assert_eq!(choices, &["ASC", "DESC"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!("Title".parse::<ShowSortBy>().is_err());
        assert!("video".parse::<ShowFilter>().is_err());
    }

    #[test]
    fn test_invalid_choice_message() {
        let err = "x".parse::<ShowFilter>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value \"x\" for only, expected one of: podcast"
        );
    }

    #[test]
    fn test_show_list_params() {
        assert_eq!(
            show_list_params(ShowSortBy::LastEpisode, None),
            vec![("sortby", "LastEpisode".to_string())]
        );
        assert_eq!(
            show_list_params(ShowSortBy::LastEpisode, Some(ShowFilter::Podcast)),
            vec![
                ("sortby", "LastEpisode".to_string()),
                ("only", "podcast".to_string())
            ]
        );
    }
}
