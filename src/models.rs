use anyhow::bail;
use serde::Deserialize;

/// Raw row from the places CSV.
///
/// Deserialized by header name, so extra columns (including the source
/// file's trailing empty columns) are ignored. Fields are optional because
/// a ragged row may not carry all of them.
#[derive(Debug, Deserialize)]
pub struct RawPlaceRow {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A validated place entry: non-empty lowercase name, finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl RawPlaceRow {
    /// Validate and normalize into a `PlaceRecord`.
    ///
    /// Names are trimmed and lowercased here so the query side can match
    /// suffixes without re-normalizing the table on every request.
    pub fn into_place(self) -> anyhow::Result<PlaceRecord> {
        let name = match self.name {
            Some(name) => name.trim().to_lowercase(),
            None => bail!("missing name"),
        };
        if name.is_empty() {
            bail!("empty name");
        }

        let latitude = match self.latitude {
            Some(v) if v.is_finite() => v,
            Some(v) => bail!("non-finite latitude {}", v),
            None => bail!("missing latitude"),
        };
        let longitude = match self.longitude {
            Some(v) if v.is_finite() => v,
            Some(v) => bail!("non-finite longitude {}", v),
            None => bail!("missing longitude"),
        };

        Ok(PlaceRecord {
            name,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> RawPlaceRow {
        RawPlaceRow {
            name: name.map(String::from),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn normalizes_name() {
        let place = raw(Some("  Stockholm "), Some(59.33), Some(18.06))
            .into_place()
            .unwrap();
        assert_eq!(place.name, "stockholm");
        assert_eq!(place.latitude, 59.33);
        assert_eq!(place.longitude, 18.06);
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(raw(None, Some(1.0), Some(2.0)).into_place().is_err());
        assert!(raw(Some("x"), None, Some(2.0)).into_place().is_err());
        assert!(raw(Some("x"), Some(1.0), None).into_place().is_err());
        assert!(raw(Some("   "), Some(1.0), Some(2.0)).into_place().is_err());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(raw(Some("x"), Some(f64::NAN), Some(2.0)).into_place().is_err());
        assert!(raw(Some("x"), Some(1.0), Some(f64::INFINITY))
            .into_place()
            .is_err());
    }
}
