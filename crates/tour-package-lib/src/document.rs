//! Guided-tour document model and rendering
//!
//! The output document is a plain [`Element`] tree. [`render`] fills it for one
//! route, [`Element::to_xml`] serializes it and [`Element::parse`] reads any
//! XML (including KML input) back into the same tree.

use crate::{Config, Coordinate, PackageError, Place, Result, TrackRoute};
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Static package header; `CreationTime` is inserted after `VersionNo`
const HEADER_ATTRIBUTES: [(&str, &str); 13] = [
    ("VersionNo", "0.0"),
    ("MapVersion", "0.0"),
    ("Language_Code_Desc", "../definitions/language.xml"),
    ("Country_Code_Desc", "../definitions/country.xml"),
    ("Supplier_Code_Desc", "../definitions/supplier.xml"),
    ("XY_Type", "WGS84"),
    ("Category_Code_Desc", "../definitions/category.xml"),
    ("Char_Set", "UTF-8"),
    ("UpdateType", "BulkUpdate"),
    ("Coverage", "0"),
    ("Category", "4096"),
    ("MajorVersion", "0"),
    ("MinorVersion", "0"),
];

const LANGUAGE_CODE: &str = "ENG";
const TRIP_TYPE: &str = "6";
const COUNTRY_CODE: &str = "3";
const COUNTRY_NAME: &str = "Germany";
const INTRODUCTION: &str = "hello!";
const DESCRIPTION: &str = "route description goes here...";

const IMPORTANCE_ALWAYS: &str = "always";
const IMPORTANCE_OPTIONAL: &str = "optional";

/// A node of an XML document: name, ordered attributes, text and children
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child and return it for further nesting
    pub fn push(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append a child holding only text
    pub fn push_text(&mut self, name: &str, text: impl Into<String>) -> &mut Element {
        self.push(Element::new(name).with_text(text))
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, empty when absent
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// First direct child with the given name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Follow a `/`-separated chain of child names
    pub fn find_path(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |element, segment| element.find(segment))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Append a text fragment; `separate` keeps fragments split by a comment
    /// from running into each other
    fn append_text(&mut self, text: &str, separate: bool) {
        if text.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => {
                let joined = existing.ends_with(char::is_whitespace)
                    || text.starts_with(char::is_whitespace);
                if separate && !existing.is_empty() && !joined {
                    existing.push(' ');
                }
                existing.push_str(text);
            }
            None => self.text = Some(text.to_string()),
        }
    }

    /// Drop indentation around children; leaf text is kept byte for byte
    fn close(&mut self) {
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new);
        } else if self.text.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.text = None;
        }
    }

    /// Serialize as a UTF-8 XML document with declaration
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut writer, self)?;
        Ok(writer.into_inner())
    }

    /// Parse an XML document into a tree
    ///
    /// Namespace prefixes are dropped from element names and CDATA is merged
    /// into the element text. Text of leaf elements is kept as written, so
    /// `<a></a>` reads as empty text and `<a/>` as no text; whitespace-only
    /// text between child elements is dropped.
    pub fn parse(xml: &[u8]) -> Result<Element> {
        let mut reader = Reader::from_reader(xml);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut after_comment = false;

        loop {
            let event = reader.read_event()?;
            let separate = std::mem::replace(
                &mut after_comment,
                matches!(event, Event::Comment(_) | Event::PI(_)),
            );
            match event {
                Event::Start(start) => stack.push(element_from_start(&start)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| PackageError::InvalidXml("unbalanced end tag".to_string()))?;
                    element.close();
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.append_text(&text.unescape()?, separate);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        let data = data.into_inner();
                        current.append_text(&String::from_utf8_lossy(&data), separate);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(PackageError::InvalidXml(format!(
                "element <{}> is never closed",
                open.name
            )));
        }
        root.ok_or_else(|| PackageError::InvalidXml("document has no root element".to_string()))
    }
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute?;
        element.attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            attribute.unescape_value()?.into_owned(),
        ));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(PackageError::InvalidXml(format!(
                "second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}

/// Per-document settings for [`render`]
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub creation_time: DateTime<Utc>,
    /// Display name used instead of the route's own name
    pub name_override: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            creation_time: Utc::now(),
            name_override: None,
        }
    }
}

impl DocumentOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            creation_time: config.resolve_creation_time(),
            name_override: config.name_override.clone(),
        }
    }
}

/// UTC timestamp with microsecond precision, e.g. `2024-05-01T12:30:00.000000Z`
pub fn format_creation_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Render the guided-tour document of a resampled route
///
/// One `Route` section is emitted per consecutive place pair; the waypoints
/// come from [`crate::build_waypoints`].
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn render(route: &TrackRoute, options: &DocumentOptions) -> Element {
    let mut package = Element::new("DeliveryPackage");
    let creation_time = format_creation_time(&options.creation_time);
    for (index, (key, value)) in HEADER_ATTRIBUTES.iter().enumerate() {
        package.attributes.push((key.to_string(), value.to_string()));
        if index == 0 {
            package
                .attributes
                .push(("CreationTime".to_string(), creation_time.clone()));
        }
    }

    let display_name = options.name_override.as_deref().unwrap_or(&route.name);

    let tour = package.push(
        Element::new("GuidedTour")
            .with_attribute("access", "WEEKDAYS")
            .with_attribute("use", "ONFOOT"),
    );
    tour.push_text("Id", route.id.to_string());
    tour.push_text("TripType", TRIP_TYPE);

    let country = tour
        .push(Element::new("Countries"))
        .push(Element::new("Country"));
    country.push_text("CountryCode", COUNTRY_CODE);
    country.push(localized("Name").with_text(COUNTRY_NAME));

    tour.push(Element::new("Names"))
        .push(localized("Name"))
        .push_text("Text", display_name);
    tour.push(measure("Length", "km"));
    tour.push(measure("Duration", "h"));
    tour.push(Element::new("Introductions"))
        .push(localized("Introduction"))
        .push_text("Text", INTRODUCTION);
    tour.push(Element::new("Descriptions"))
        .push(localized("Description"))
        .push_text("Text", DESCRIPTION);
    tour.push(Element::new("Pictures"));
    tour.push(entry_points(&route.places));

    let routes = tour.push(Element::new("Routes"));
    for segment in 0..route.places.len().saturating_sub(1) {
        routes.push(render_segment(route, segment));
    }

    package
}

fn localized(name: &str) -> Element {
    Element::new(name).with_attribute("Language_Code", LANGUAGE_CODE)
}

fn measure(name: &str, unit: &str) -> Element {
    Element::new(name).with_attribute("Unit", unit).with_text("0")
}

/// Segment boundary index: `0_0` for the first place, then `<place>_<last waypoint>`
fn entry_points(places: &[Place]) -> Element {
    let mut entry_points = Element::new("EntryPoints");
    for (index, place) in places
        .iter()
        .take(places.len().saturating_sub(1))
        .enumerate()
    {
        let id = if index == 0 {
            "0_0".to_string()
        } else {
            waypoint_id(index, place.waypoints.len().saturating_sub(1))
        };
        entry_points.push(
            Element::new("EntryPoint")
                .with_attribute("Route", (index + 1).to_string())
                .with_text(id),
        );
    }
    entry_points
}

fn waypoint_id(segment: usize, counter: usize) -> String {
    format!("{segment}_{counter}")
}

/// One `Route` section for the segment starting at `places[segment]`
fn render_segment(route: &TrackRoute, segment: usize) -> Element {
    let mut section = Element::new("Route");
    section.push_text("RouteID", route.id.to_string());

    let waypoints = &route.places[segment].waypoints;
    let next_name = route.places[segment + 1].name.as_str();
    let mut counter = 0;
    for (index, coordinate) in waypoints.iter().enumerate() {
        let place_name = if index + 1 == waypoints.len() {
            Some(next_name)
        } else if segment == 0 && index == 0 {
            Some(route.places[0].name.as_str())
        } else {
            None
        };
        section.push(render_waypoint(
            &waypoint_id(segment, counter),
            coordinate,
            place_name,
        ));
        counter += 1;
    }

    section.push(measure("Length", "km"));
    section.push(measure("Duration", "h"));
    section.push_text("CostModel", "0");
    section.push_text("Criteria", "0");
    section
}

fn render_waypoint(id: &str, coordinate: &Coordinate, place_name: Option<&str>) -> Element {
    let mut waypoint = Element::new("WayPoint");
    waypoint.push_text("Id", id);

    let location = waypoint
        .push(Element::new("Locations"))
        .push(Element::new("Location"));
    if let Some(name) = place_name {
        let parsed = location
            .push(Element::new("Address"))
            .push(Element::new("ParsedAddress"));
        parsed
            .push(Element::new("ParsedStreetAddress"))
            .push_text("StreetName", name);
        parsed
            .push(Element::new("ParsedPlace"))
            .push_text("PlaceLevel4", name);
    }
    let position = location.push(Element::new("GeoPosition"));
    position.push_text("Latitude", coordinate.latitude().to_string());
    position.push_text("Longitude", coordinate.longitude().to_string());

    let importance = if place_name.is_some() {
        IMPORTANCE_ALWAYS
    } else {
        IMPORTANCE_OPTIONAL
    };
    waypoint.push_text("Importance", importance);
    waypoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assign_closest_samples, build_waypoints};
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_options() -> DocumentOptions {
        DocumentOptions {
            creation_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            name_override: None,
        }
    }

    fn prepared_route(place_positions: &[(&str, f64, f64)], samples: usize, max: usize) -> TrackRoute {
        let places = place_positions
            .iter()
            .map(|&(name, x, y)| Place::new(name, Coordinate::new(x, y, None)))
            .collect();
        let path = (0..samples)
            .map(|i| Coordinate::new(i as f64, i as f64, Some(0.0)))
            .collect();
        let mut route = TrackRoute::new(3, "Old Town", places, path);
        assign_closest_samples(&mut route.places, &route.path);
        build_waypoints(&mut route, max).unwrap();
        route
    }

    fn importance(waypoint: &Element) -> &str {
        waypoint.find("Importance").unwrap().text()
    }

    fn street_name(waypoint: &Element) -> Option<&str> {
        waypoint
            .find_path("Locations/Location/Address/ParsedAddress/ParsedStreetAddress/StreetName")
            .map(Element::text)
    }

    #[test]
    fn test_header_attributes() {
        let route = prepared_route(&[("A", 0.0, 0.0), ("B", 4.0, 4.0)], 5, 10);
        let document = render(&route, &fixed_options());

        assert_eq!(document.name, "DeliveryPackage");
        assert_eq!(document.attributes[0].0, "VersionNo");
        assert_eq!(document.attributes[1].0, "CreationTime");
        assert_eq!(
            document.attribute("CreationTime"),
            Some("2024-05-01T12:30:00.000000Z")
        );
        assert_eq!(document.attribute("Char_Set"), Some("UTF-8"));
        assert_eq!(document.attribute("UpdateType"), Some("BulkUpdate"));
        assert_eq!(document.attribute("Category"), Some("4096"));
        assert_eq!(document.attributes.len(), 14);
    }

    #[test]
    fn test_creation_time_has_microseconds() {
        let time = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::microseconds(123_456);
        assert_eq!(format_creation_time(&time), "2023-01-02T03:04:05.123456Z");
    }

    #[test]
    fn test_tour_block() {
        let route = prepared_route(&[("A", 0.0, 0.0), ("B", 4.0, 4.0)], 5, 10);
        let document = render(&route, &fixed_options());
        let tour = document.find("GuidedTour").unwrap();

        assert_eq!(tour.attribute("access"), Some("WEEKDAYS"));
        assert_eq!(tour.find("Id").unwrap().text(), "3");
        assert_eq!(tour.find("TripType").unwrap().text(), "6");
        assert_eq!(
            tour.find_path("Countries/Country/Name").unwrap().text(),
            "Germany"
        );
        assert_eq!(tour.find_path("Names/Name/Text").unwrap().text(), "Old Town");
        assert_eq!(tour.find("Length").unwrap().text(), "0");
        assert_eq!(tour.find("Length").unwrap().attribute("Unit"), Some("km"));
        assert!(tour.find("Pictures").unwrap().children.is_empty());
        assert!(tour.find_path("Introductions/Introduction/Text").is_some());
        assert!(tour.find_path("Descriptions/Description/Text").is_some());
    }

    #[test]
    fn test_name_override() {
        let route = prepared_route(&[("A", 0.0, 0.0), ("B", 4.0, 4.0)], 5, 10);
        let options = DocumentOptions {
            name_override: Some("Sunday ride".to_string()),
            ..fixed_options()
        };
        let document = render(&route, &options);
        assert_eq!(
            document
                .find_path("GuidedTour/Names/Name/Text")
                .unwrap()
                .text(),
            "Sunday ride"
        );
    }

    #[test]
    fn test_straight_line_importance() {
        let route = prepared_route(&[("Start", 0.0, 0.0), ("Finish", 10.0, 10.0)], 11, 5);
        let document = render(&route, &fixed_options());
        let sections: Vec<&Element> = document
            .find_path("GuidedTour/Routes")
            .unwrap()
            .children_named("Route")
            .collect();
        assert_eq!(sections.len(), 1);

        let waypoints: Vec<&Element> = sections[0].children_named("WayPoint").collect();
        assert_eq!(waypoints.len(), route.places[0].waypoints.len());

        let first = waypoints[0];
        let last = waypoints[waypoints.len() - 1];
        assert_eq!(importance(first), "always");
        assert_eq!(street_name(first), Some("Start"));
        assert_eq!(importance(last), "always");
        assert_eq!(street_name(last), Some("Finish"));
        assert_eq!(
            last.find_path("Locations/Location/Address/ParsedAddress/ParsedPlace/PlaceLevel4")
                .unwrap()
                .text(),
            "Finish"
        );

        for waypoint in &waypoints[1..waypoints.len() - 1] {
            assert_eq!(importance(waypoint), "optional");
            assert!(street_name(waypoint).is_none());
        }
    }

    #[test]
    fn test_waypoint_ids_restart_per_section() {
        let route = prepared_route(&[("A", 0.0, 0.0), ("B", 4.0, 4.0), ("C", 8.0, 8.0)], 9, 10);
        let document = render(&route, &fixed_options());
        let sections: Vec<&Element> = document
            .find_path("GuidedTour/Routes")
            .unwrap()
            .children_named("Route")
            .collect();
        assert_eq!(sections.len(), 2);

        for (segment, section) in sections.iter().enumerate() {
            assert_eq!(section.find("RouteID").unwrap().text(), "3");
            let ids: Vec<&str> = section
                .children_named("WayPoint")
                .map(|w| w.find("Id").unwrap().text())
                .collect();
            let expected: Vec<String> = (0..ids.len()).map(|j| format!("{segment}_{j}")).collect();
            assert_eq!(ids, expected);
            assert_eq!(section.find("CostModel").unwrap().text(), "0");
            assert_eq!(section.find("Criteria").unwrap().text(), "0");
        }

        // Second section: no leading place anchor, only the trailing one
        let second: Vec<&Element> = sections[1].children_named("WayPoint").collect();
        assert_eq!(importance(second[0]), "optional");
        assert_eq!(street_name(second[second.len() - 1]), Some("C"));
    }

    #[test]
    fn test_latitude_is_second_component() {
        let mut route = prepared_route(&[("A", 0.0, 0.0), ("B", 4.0, 4.0)], 5, 10);
        route.places[0].waypoints[0] = Coordinate::new(13.25, 52.5, None);
        let document = render(&route, &fixed_options());
        let position = document
            .find_path("GuidedTour/Routes/Route/WayPoint/Locations/Location/GeoPosition")
            .unwrap();
        assert_eq!(position.find("Latitude").unwrap().text(), "52.5");
        assert_eq!(position.find("Longitude").unwrap().text(), "13.25");
    }

    #[test]
    fn test_entry_points_are_unique_and_well_formed() {
        let route = prepared_route(
            &[("A", 0.0, 0.0), ("B", 10.0, 10.0), ("C", 20.0, 20.0), ("D", 30.0, 30.0)],
            31,
            4,
        );
        let document = render(&route, &fixed_options());
        let entries: Vec<&Element> = document
            .find_path("GuidedTour/EntryPoints")
            .unwrap()
            .children_named("EntryPoint")
            .collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].text(), "0_0");

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.attribute("Route"), Some((index + 1).to_string().as_str()));
            let (place, count) = entry.text().split_once('_').unwrap();
            assert_eq!(place.parse::<usize>().unwrap(), index);
            let count: usize = count.parse().unwrap();
            if index > 0 {
                assert_eq!(count, route.places[index].waypoints.len() - 1);
            }
            assert!(seen.insert(entry.text().to_string()));
        }
    }

    #[test]
    fn test_xml_round_trip() {
        let route = prepared_route(&[("Café & <Bar>", 0.0, 0.0), ("B", 6.0, 6.0)], 7, 3);
        let document = render(&route, &fixed_options());

        let xml = document.to_xml().unwrap();
        let text = String::from_utf8(xml.clone()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("Caf\u{e9} &amp; &lt;Bar&gt;"));

        let parsed = Element::parse(&xml).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_parse_merges_cdata_and_strips_prefixes() {
        let xml = br#"<kml:Placemark xmlns:kml="urn:x"><kml:name><![CDATA[ Old Bridge ]]></kml:name></kml:Placemark>"#;
        let parsed = Element::parse(xml).unwrap();
        assert_eq!(parsed.name, "Placemark");
        assert_eq!(parsed.attribute("xmlns:kml"), Some("urn:x"));
        assert_eq!(parsed.find("name").unwrap().text(), " Old Bridge ");
    }

    #[test]
    fn test_xml_round_trip_keeps_padded_and_empty_names() {
        let route = prepared_route(&[(" Gate ", 0.0, 0.0), ("", 6.0, 6.0)], 7, 3);
        let document = render(&route, &fixed_options());

        let parsed = Element::parse(&document.to_xml().unwrap()).unwrap();
        assert_eq!(parsed, document);

        let names: Vec<Option<&str>> = parsed
            .find_path("GuidedTour/Routes/Route")
            .unwrap()
            .children_named("WayPoint")
            .filter_map(|w| {
                w.find_path("Locations/Location/Address/ParsedAddress/ParsedStreetAddress/StreetName")
            })
            .map(|e| e.text.as_deref())
            .collect();
        assert_eq!(names, vec![Some(" Gate "), Some("")]);
    }

    #[test]
    fn test_parse_empty_element_forms() {
        let parsed = Element::parse(b"<a><b></b><c/><d>  </d>\n  <e>x</e>\n</a>").unwrap();
        assert_eq!(parsed.text, None);
        assert_eq!(parsed.find("b").unwrap().text, Some(String::new()));
        assert_eq!(parsed.find("c").unwrap().text, None);
        assert_eq!(parsed.find("d").unwrap().text(), "  ");
        assert_eq!(parsed.find("e").unwrap().text(), "x");
    }

    #[test]
    fn test_parse_keeps_text_split_by_comment_apart() {
        let parsed =
            Element::parse(b"<coordinates>0,0,0 1,1,0<!-- gap -->2,2,0 3,3,0</coordinates>")
                .unwrap();
        assert_eq!(parsed.text(), "0,0,0 1,1,0 2,2,0 3,3,0");

        let cdata = Element::parse(b"<name>Old <![CDATA[Bridge]]></name>").unwrap();
        assert_eq!(cdata.text(), "Old Bridge");
    }

    #[test]
    fn test_parse_rejects_unclosed_and_empty_documents() {
        assert!(Element::parse(b"<a><b></b>").is_err());
        assert!(matches!(
            Element::parse(b"   "),
            Err(PackageError::InvalidXml(_))
        ));
        assert!(Element::parse(b"<a></b>").is_err());
    }
}
