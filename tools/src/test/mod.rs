use nbtree::{List, Node, Tag, Value};

mod output;

pub fn string(name: &str, s: &str) -> Node {
    Node::new(name, Value::String(s.to_owned()))
}

pub fn compound(name: &str, children: Vec<Node>) -> Node {
    Node::new(name, Value::Compound(children))
}

pub fn list_of_compounds(name: &str, elements: Vec<Vec<Node>>) -> Node {
    let values = elements.into_iter().map(Value::Compound).collect();
    Node::new(name, Value::List(List::new(Tag::Compound, values).unwrap()))
}

pub fn pages(pages: &[&str]) -> Node {
    let values = pages.iter().map(|p| Value::String(p.to_string())).collect();
    Node::new("pages", Value::List(List::new(Tag::String, values).unwrap()))
}

/// An item compound for a book with the given fields in its `tag`.
pub fn book_item(id: &str, tag: Vec<Node>) -> Vec<Node> {
    vec![
        string("id", id),
        Node::new("Count", Value::Byte(1)),
        compound("tag", tag),
    ]
}

/// Encode a tree as NBT. nbtree only decodes, so tests that go through files
/// need to write the data themselves.
pub fn encode(node: &Node) -> Vec<u8> {
    let mut out = vec![u8::from(node.tag())];
    encode_str(&mut out, node.name());
    encode_value(&mut out, node.value());
    out
}

fn encode_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn encode_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::End => {}
        Value::Byte(v) => out.push(*v as u8),
        Value::Short(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::Double(v) => out.extend_from_slice(&v.to_be_bytes()),
        Value::String(s) => encode_str(out, s),
        Value::ByteArray(bs) => {
            out.extend_from_slice(&(bs.len() as i32).to_be_bytes());
            out.extend(bs.iter().map(|b| *b as u8));
        }
        Value::IntArray(is) => {
            out.extend_from_slice(&(is.len() as i32).to_be_bytes());
            for i in is {
                out.extend_from_slice(&i.to_be_bytes());
            }
        }
        Value::LongArray(ls) => {
            out.extend_from_slice(&(ls.len() as i32).to_be_bytes());
            for l in ls {
                out.extend_from_slice(&l.to_be_bytes());
            }
        }
        Value::List(list) => {
            out.push(u8::from(list.element_tag()));
            out.extend_from_slice(&(list.len() as i32).to_be_bytes());
            for v in list {
                encode_value(out, v);
            }
        }
        Value::Compound(children) => {
            for child in children {
                out.extend(encode(child));
            }
            out.push(u8::from(Tag::End));
        }
    }
}
