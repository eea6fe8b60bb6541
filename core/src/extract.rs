//! XML extractors for the manager's response shapes.
//!
//! The manager wraps repeated elements in varying container elements, so
//! each extractor matches its record element by name at any depth and
//! reads the record's fields as the first occurrence of each child element,
//! in document order. Absent optional fields normalize to `""`; absent
//! required fields are a parse error naming the response.

use quick_xml::Reader;
use quick_xml::events::Event;

use sgquery_common::error::QueryError;
use sgquery_common::model::{IpMember, SecurityGroup, StaticMember, VmMember};

struct Field {
    tag: &'static str,
    required: bool,
}

const fn required(tag: &'static str) -> Field {
    Field { tag, required: true }
}

const fn optional(tag: &'static str) -> Field {
    Field { tag, required: false }
}

/// Parses the security group catalog into `{id, name, description}` triples.
pub fn security_groups(xml: &str) -> Result<Vec<SecurityGroup>, QueryError> {
    let fields = [required("objectId"), required("name"), optional("description")];
    let records = scan_records(xml, "securitygroup", fields, "security group catalog")?;

    Ok(records
        .into_iter()
        .map(|[id, name, description]| SecurityGroup { id, name, description })
        .collect())
}

/// Parses a group definition's directly included members.
pub fn static_members(xml: &str) -> Result<Vec<StaticMember>, QueryError> {
    let fields = [required("objectId"), required("objectTypeName"), required("name")];
    let records = scan_records(xml, "member", fields, "static include")?;

    Ok(records
        .into_iter()
        .map(|[object_id, object_type, name]| StaticMember {
            object_id,
            object_type,
            name,
        })
        .collect())
}

/// Parses translated virtual machine members.
pub fn vm_members(xml: &str) -> Result<Vec<VmMember>, QueryError> {
    let fields = [required("vmId"), required("vmName")];
    let records = scan_records(xml, "vmnode", fields, "virtual machine translation")?;

    Ok(records
        .into_iter()
        .map(|[object_id, name]| VmMember { object_id, name })
        .collect())
}

/// Parses translated IP address members.
///
/// One `ipNode` carries zero or more `string` descendants, one address
/// each; the result is flattened to one record per string. A node with no
/// strings contributes nothing and is not an error.
pub fn ip_members(xml: &str) -> Result<Vec<IpMember>, QueryError> {
    const CONTEXT: &str = "IP address translation";

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut members: Vec<IpMember> = Vec::new();
    let mut depth: usize = 0;
    let mut open_nodes: usize = 0;
    let mut capture: Option<(usize, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                depth += 1;
                let name = start.name();
                if name.as_ref() == b"ipNode" {
                    open_nodes += 1;
                } else if open_nodes > 0 && capture.is_none() && name.as_ref() == b"string" {
                    capture = Some((depth, String::new()));
                }
            }
            Ok(Event::Text(text)) => {
                if let Some((_, address)) = capture.as_mut() {
                    let chunk = text
                        .unescape()
                        .map_err(|err| QueryError::parse(CONTEXT, err.to_string()))?;
                    address.push_str(&chunk);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some((_, address)) = capture.as_mut() {
                    address.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::End(end)) => {
                if capture.as_ref().is_some_and(|(at, _)| *at == depth) {
                    if let Some((_, address)) = capture.take() {
                        members.push(IpMember::new(address));
                    }
                } else if end.name().as_ref() == b"ipNode" && open_nodes > 0 {
                    open_nodes -= 1;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(QueryError::parse(CONTEXT, err.to_string())),
        }
    }

    Ok(members)
}

struct Capture {
    index: usize,
    depth: usize,
    text: String,
}

/// Collects every `record` element in the document, reading each listed
/// field as the text of its first matching descendant.
fn scan_records<const N: usize>(
    xml: &str,
    record: &'static str,
    fields: [Field; N],
    context: &'static str,
) -> Result<Vec<[String; N]>, QueryError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut records: Vec<[String; N]> = Vec::new();
    let mut values: [Option<String>; N] = std::array::from_fn(|_| None);
    let mut depth: usize = 0;
    let mut record_depth: Option<usize> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                depth += 1;
                let name = start.name();
                if record_depth.is_none() {
                    if name.as_ref() == record.as_bytes() {
                        record_depth = Some(depth);
                        values = std::array::from_fn(|_| None);
                    }
                } else if capture.is_none() {
                    let hit = fields
                        .iter()
                        .position(|field| name.as_ref() == field.tag.as_bytes());
                    if let Some(index) = hit {
                        if values[index].is_none() {
                            capture = Some(Capture {
                                index,
                                depth,
                                text: String::new(),
                            });
                        }
                    }
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(active) = capture.as_mut() {
                    let chunk = text
                        .unescape()
                        .map_err(|err| QueryError::parse(context, err.to_string()))?;
                    active.text.push_str(&chunk);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(active) = capture.as_mut() {
                    active.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if capture.as_ref().is_some_and(|active| active.depth == depth) {
                    if let Some(active) = capture.take() {
                        values[active.index] = Some(active.text);
                    }
                }
                if record_depth == Some(depth) {
                    records.push(finish_record(record, &fields, &mut values, context)?);
                    record_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(QueryError::parse(context, err.to_string())),
        }
    }

    Ok(records)
}

fn finish_record<const N: usize>(
    record: &'static str,
    fields: &[Field; N],
    values: &mut [Option<String>; N],
    context: &'static str,
) -> Result<[String; N], QueryError> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (index, field) in fields.iter().enumerate() {
        match values[index].take() {
            Some(text) => out[index] = text,
            None if field.required => {
                return Err(QueryError::parse(
                    context,
                    format!("<{record}> entry is missing <{}>", field.tag),
                ));
            }
            None => {}
        }
    }
    Ok(out)
}
