//! Hypermedia links
//!
//! Relative link building for band resources and the paged band
//! collection. Collection links reproduce the full query string so a
//! client can follow `nextPage`/`previousPage` without reassembling
//! parameters.

use encore_core::query::BandQuery;
use encore_core::types::BandId;
use serde::Serialize;
use url::form_urlencoded;

#[derive(Debug, Clone, Serialize)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl LinkDto {
    pub fn new(href: impl Into<String>, rel: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
        }
    }
}

/// Links attached to a single band resource.
pub fn band_links(band_id: &BandId, fields: Option<&str>) -> Vec<LinkDto> {
    let self_href = match fields.filter(|f| !f.trim().is_empty()) {
        Some(fields) => {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("fields", fields)
                .finish();
            format!("/api/bands/{band_id}?{query}")
        }
        None => format!("/api/bands/{band_id}"),
    };

    vec![
        LinkDto::new(self_href, "self", "GET"),
        LinkDto::new(format!("/api/bands/{band_id}"), "delete_band", "DELETE"),
        LinkDto::new(
            format!("/api/bands/{band_id}/albums"),
            "create_album_for_band",
            "POST",
        ),
        LinkDto::new(format!("/api/bands/{band_id}/albums"), "albums", "GET"),
    ]
}

/// Links attached to the paged band collection.
pub fn bands_collection_links(
    query: &BandQuery,
    has_next: bool,
    has_previous: bool,
) -> Vec<LinkDto> {
    let mut links = vec![LinkDto::new(
        bands_page_href(query, query.page()),
        "self",
        "GET",
    )];

    if has_next {
        links.push(LinkDto::new(
            bands_page_href(query, query.page() + 1),
            "nextPage",
            "GET",
        ));
    }

    if has_previous {
        links.push(LinkDto::new(
            bands_page_href(query, query.page() - 1),
            "previousPage",
            "GET",
        ));
    }

    links
}

fn bands_page_href(query: &BandQuery, page: u32) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if let Some(fields) = &query.fields {
        serializer.append_pair("fields", fields);
    }
    serializer.append_pair("orderBy", &query.order_by);
    serializer.append_pair("pageNumber", &page.to_string());
    serializer.append_pair("pageSize", &query.size().to_string());
    if let Some(genre) = &query.main_genre {
        serializer.append_pair("mainGenre", genre);
    }
    if let Some(search) = &query.search_query {
        serializer.append_pair("searchQuery", search);
    }

    format!("/api/bands?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_links_only_include_existing_neighbours() {
        let query = BandQuery {
            page_number: 2,
            ..BandQuery::default()
        };

        let links = bands_collection_links(&query, true, true);
        let rels: Vec<_> = links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, vec!["self", "nextPage", "previousPage"]);

        let links = bands_collection_links(&query, false, false);
        let rels: Vec<_> = links.iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, vec!["self"]);
    }

    #[test]
    fn page_links_point_at_adjacent_pages() {
        let query = BandQuery {
            page_number: 2,
            page_size: 3,
            search_query: Some("Fire".to_string()),
            ..BandQuery::default()
        };

        let links = bands_collection_links(&query, true, true);
        let next = links.iter().find(|l| l.rel == "nextPage").unwrap();
        assert!(next.href.contains("pageNumber=3"));
        assert!(next.href.contains("searchQuery=Fire"));

        let previous = links.iter().find(|l| l.rel == "previousPage").unwrap();
        assert!(previous.href.contains("pageNumber=1"));
    }

    #[test]
    fn band_links_carry_fields_on_self_only() {
        let id = BandId::new("b1");
        let links = band_links(&id, Some("name,mainGenre"));

        let this = links.iter().find(|l| l.rel == "self").unwrap();
        assert_eq!(this.href, "/api/bands/b1?fields=name%2CmainGenre");

        let delete = links.iter().find(|l| l.rel == "delete_band").unwrap();
        assert_eq!(delete.href, "/api/bands/b1");
    }
}
