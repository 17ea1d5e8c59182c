use crate::error::DetailError;

/// The five query parameters the detail page is entered with.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailQuery {
    pub agency_id: i64,
    pub phone_brand: String,
    pub phone_name: String,
    pub telecom: String,
    pub subscription_type: String,
}

/// Look up the first value for `name`, treating empty values as absent.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

fn required(query: &str, name: &'static str) -> Result<String, DetailError> {
    query_param(query, name).ok_or(DetailError::MissingParameter(name))
}

impl DetailQuery {
    pub fn parse(query: &str) -> Result<Self, DetailError> {
        let agency_id = required(query, "agency_id")?
            .trim()
            .parse::<i64>()
            .map_err(|_| DetailError::MissingParameter("agency_id"))?;
        Ok(Self {
            agency_id,
            phone_brand: required(query, "phone_brand")?,
            phone_name: required(query, "phone_name")?,
            telecom: required(query, "telecom")?,
            subscription_type: required(query, "subscription_type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "?agency_id=12&phone_brand=samsung&phone_name=Galaxy%20S24&telecom=SKT&subscription_type=transfer";

    #[test]
    fn parses_all_parameters() {
        let query = DetailQuery::parse(FULL).unwrap();
        assert_eq!(
            query,
            DetailQuery {
                agency_id: 12,
                phone_brand: "samsung".into(),
                phone_name: "Galaxy S24".into(),
                telecom: "SKT".into(),
                subscription_type: "transfer".into(),
            }
        );
    }

    #[test]
    fn each_missing_parameter_is_reported() {
        for name in ["agency_id", "phone_brand", "phone_name", "telecom", "subscription_type"] {
            let query: String = FULL
                .trim_start_matches('?')
                .split('&')
                .filter(|pair| !pair.starts_with(&format!("{}=", name)))
                .collect::<Vec<_>>()
                .join("&");
            assert_eq!(
                DetailQuery::parse(&query),
                Err(DetailError::MissingParameter(name)),
                "dropping {}",
                name
            );
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let query = FULL.replace("telecom=SKT", "telecom=");
        assert_eq!(
            DetailQuery::parse(&query),
            Err(DetailError::MissingParameter("telecom"))
        );
    }

    #[test]
    fn non_numeric_agency_id_is_rejected() {
        let query = FULL.replace("agency_id=12", "agency_id=abc");
        assert_eq!(
            DetailQuery::parse(&query),
            Err(DetailError::MissingParameter("agency_id"))
        );
    }
}
