// crates/popdb-web/src/pages.rs

//! Minimal HTML for the two pages. Every interpolated value is escaped.

use crate::ChartLinks;
use html_escape::{encode_double_quoted_attribute, encode_text};

const HEAD: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n";

/// Country selector posting to `/visualize`.
pub fn index_page(countries: &[String]) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<title>World Population</title>\n</head>\n<body>\n");
    html.push_str("<h1>World Population</h1>\n");
    html.push_str("<form method=\"post\" action=\"/visualize\">\n");
    html.push_str("<label for=\"country\">Country</label>\n");
    html.push_str("<select id=\"country\" name=\"country\">\n");
    for country in countries {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            encode_double_quoted_attribute(country),
            encode_text(country)
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Visualize</button>\n</form>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// The three generated charts for one country.
pub fn result_page(links: &ChartLinks) -> String {
    let country = encode_text(&links.country);
    let mut html = String::from(HEAD);
    html.push_str(&format!("<title>{country}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{country}</h1>\n"));
    for (alt, src) in [
        ("Population growth", &links.population_growth),
        ("Population distribution by country", &links.country_pie),
        ("Gender distribution", &links.gender_distribution),
    ] {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{alt}\">\n",
            encode_double_quoted_attribute(src)
        ));
    }
    html.push_str("<p><a href=\"/\">Back</a></p>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_names_are_escaped() {
        let html = index_page(&["Bosnia & Herzegovina".to_string(), "\"Q\"".to_string()]);
        assert!(html.contains("Bosnia &amp; Herzegovina"));
        assert!(html.contains("value=\"&quot;Q&quot;\""));
    }

    #[test]
    fn result_page_links_every_chart() {
        let links = ChartLinks::for_country("A<b>");
        let html = result_page(&links);
        assert!(html.contains("/static/population_growth.png"));
        assert!(html.contains("/static/country_pie.png"));
        assert!(html.contains("/static/gender_distribution.png"));
        assert!(html.contains("A&lt;b&gt;"));
    }
}
