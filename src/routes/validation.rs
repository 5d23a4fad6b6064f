use url::Url;

use crate::routes::add::AddCafeForm;

/// Check the submitted add form, returning the names of the failed fields
///
/// Required text fields must be non-empty after trimming; `map_url` and
/// `img_url` must additionally parse as URLs naming a scheme and a host.
/// `coffee_price` is optional and never fails validation.
pub fn validate_add_form(form: &AddCafeForm) -> Vec<&'static str> {
    let mut failed = Vec::new();

    if form.cafe.trim().is_empty() {
        failed.push("cafe");
    }
    if !is_web_url(form.map_url.trim()) {
        failed.push("map_url");
    }
    if !is_web_url(form.img_url.trim()) {
        failed.push("img_url");
    }
    if form.location.trim().is_empty() {
        failed.push("location");
    }
    if form.seats.trim().is_empty() {
        failed.push("seats");
    }

    failed
}

/// A URL is acceptable when it parses and names both a scheme and a host.
/// The empty string never parses, so required-ness needs no separate check.
pub fn is_web_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}

/// A checkbox key present in the submitted form means checked; an absent
/// key means unchecked. The value itself is never interpreted.
pub fn checkbox_to_bool(field: &Option<String>) -> bool {
    field.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddCafeForm {
        AddCafeForm {
            cafe: "Blue Bottle".to_string(),
            map_url: "http://maps.example/1".to_string(),
            img_url: "http://img.example/1.png".to_string(),
            location: "Downtown".to_string(),
            seats: "10-20".to_string(),
            toilet: Some("on".to_string()),
            wifi: Some("on".to_string()),
            sockets: None,
            calls: None,
            coffee_price: "$3".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_add_form(&valid_form()).is_empty());
    }

    #[test]
    fn test_empty_required_fields_fail() {
        let form = AddCafeForm::default();
        let failed = validate_add_form(&form);

        assert_eq!(failed, vec!["cafe", "map_url", "img_url", "location", "seats"]);
    }

    #[test]
    fn test_url_without_scheme_fails() {
        let mut form = valid_form();
        form.img_url = "img.example/1.png".to_string();

        assert_eq!(validate_add_form(&form), vec!["img_url"]);
    }

    #[test]
    fn test_url_without_host_fails() {
        // mailto: parses but names no host
        assert!(!is_web_url("mailto:owner@img.example"));
        assert!(!is_web_url("data:text/plain,hello"));
    }

    #[test]
    fn test_web_urls_accepted() {
        assert!(is_web_url("http://maps.example/1"));
        assert!(is_web_url("https://img.example/photo.png?size=large"));
    }

    #[test]
    fn test_missing_coffee_price_is_fine() {
        let mut form = valid_form();
        form.coffee_price = String::new();

        assert!(validate_add_form(&form).is_empty());
    }

    #[test]
    fn test_checkbox_mapping() {
        assert!(checkbox_to_bool(&Some("on".to_string())));
        // Value is irrelevant, only presence counts
        assert!(checkbox_to_bool(&Some(String::new())));
        assert!(!checkbox_to_bool(&None));
    }
}
