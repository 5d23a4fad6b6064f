//! Thin HTML layer
//!
//! Pages are built as strings; there is no template engine. Every
//! user-sourced value goes through `escape` before interpolation.

use crate::models::{Cafe, CafeRow};
use crate::routes::add::AddCafeForm;

/// Escape text for interpolation into HTML
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Landing page
pub fn index_page() -> String {
    layout(
        "Cafe Directory",
        "<h1>Cafe &amp; Wifi Directory</h1>\n\
         <p><a href=\"/cafes\">Browse cafes</a></p>\n\
         <p><a href=\"/add\">Add a cafe</a></p>\n\
         <p><a href=\"/search\">Search by location</a></p>",
    )
}

/// The list view. `notice` is the optional one-shot banner from a redirect.
pub fn cafes_page(rows: &[CafeRow], notice: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(notice) = notice {
        body.push_str(&format!("<p class=\"notice\">{}</p>\n", escape(notice)));
    }

    body.push_str(
        "<h1>All Cafes</h1>\n<table>\n<tr><th>Name</th><th>Picture</th><th>Map</th>\
         <th>Location</th><th>Seats</th><th>Toilet</th><th>Wifi</th><th>Sockets</th>\
         <th>Calls</th><th>Coffee Price</th><th></th></tr>\n",
    );
    for row in rows {
        body.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"{}\">image</a></td><td><a href=\"{}\">map</a></td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/update-price?cafe_id={}\">edit price</a> \
             <a href=\"/reports-closed/{}\">report closed</a></td></tr>\n",
            escape(&row.name),
            escape(&row.img_url),
            escape(&row.map_url),
            escape(&row.location),
            escape(&row.seats),
            row.has_toilet,
            row.has_wifi,
            row.has_sockets,
            row.can_take_calls,
            escape(&row.coffee_price),
            row.id,
            row.id,
        ));
    }
    body.push_str("</table>\n<p><a href=\"/\">Home</a></p>");

    layout("All Cafes", &body)
}

/// The add form, pre-filled with whatever was submitted. Failed field
/// names get an inline marker.
pub fn add_form_page(form: &AddCafeForm, failed: &[&str]) -> String {
    fn text_field(label: &str, name: &str, value: &str, failed: &[&str]) -> String {
        let marker = if failed.contains(&name) {
            " <span class=\"field-error\">required / invalid</span>"
        } else {
            ""
        };
        format!(
            "<p><label>{label}{marker} <input type=\"text\" name=\"{name}\" value=\"{}\"></label></p>\n",
            escape(value),
        )
    }

    fn checkbox_field(label: &str, name: &str, checked: bool) -> String {
        let checked = if checked { " checked" } else { "" };
        format!(
            "<p><label>{label} <input type=\"checkbox\" name=\"{name}\"{checked}></label></p>\n"
        )
    }

    let mut body = String::from("<h1>Add a Cafe</h1>\n<form method=\"post\" action=\"/add\">\n");
    body.push_str(&text_field("Cafe name", "cafe", &form.cafe, failed));
    body.push_str(&text_field("Picture link", "img_url", &form.img_url, failed));
    body.push_str(&text_field("Map link", "map_url", &form.map_url, failed));
    body.push_str(&text_field("Location", "location", &form.location, failed));
    body.push_str(&text_field("Number of seats", "seats", &form.seats, failed));
    body.push_str(&checkbox_field("Has toilet", "toilet", form.toilet.is_some()));
    body.push_str(&checkbox_field("Has wifi", "wifi", form.wifi.is_some()));
    body.push_str(&checkbox_field("Has sockets", "sockets", form.sockets.is_some()));
    body.push_str(&checkbox_field("Can take calls", "calls", form.calls.is_some()));
    body.push_str(&text_field(
        "Coffee price",
        "coffee_price",
        &form.coffee_price,
        failed,
    ));
    body.push_str("<p><button type=\"submit\">Submit</button></p>\n</form>");

    layout("Add Cafe", &body)
}

pub fn search_form_page() -> String {
    layout(
        "Search",
        "<h1>Search by Location</h1>\n\
         <form method=\"post\" action=\"/search\">\n\
         <p><label>Location <input type=\"text\" name=\"location\"></label></p>\n\
         <p><button type=\"submit\">Search</button></p>\n\
         </form>",
    )
}

/// The price edit form; `None` renders an empty selection
pub fn edit_price_page(cafe: Option<&Cafe>) -> String {
    let body = match cafe {
        Some(cafe) => format!(
            "<h1>Update price for {}</h1>\n\
             <form method=\"post\" action=\"/update-price\">\n\
             <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
             <p><label>New price <input type=\"text\" name=\"new_price\" value=\"{}\"></label></p>\n\
             <p><button type=\"submit\">Update</button></p>\n\
             </form>",
            escape(&cafe.name),
            cafe.id,
            escape(cafe.coffee_price.as_deref().unwrap_or("")),
        ),
        None => String::from(
            "<h1>Update price</h1>\n<p>No cafe selected.</p>\n\
             <p><a href=\"/cafes\">Back to the list</a></p>",
        ),
    };

    layout("Update Price", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("Blue Bottle"), "Blue Bottle");
    }

    #[test]
    fn test_add_form_marks_failed_fields() {
        let form = AddCafeForm {
            img_url: "img.example/1.png".to_string(),
            ..AddCafeForm::default()
        };
        let page = add_form_page(&form, &["img_url"]);

        assert!(page.contains("field-error"));
        // The submitted value is re-presented unchanged
        assert!(page.contains("value=\"img.example/1.png\""));
    }
}
