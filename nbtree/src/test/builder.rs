use crate::Tag;

/// Writes NBT bytes for tests. Nothing checks that the result is a valid
/// document, which is the point: broken input is what most tests want.
pub struct Builder {
    payload: Vec<u8>,
}

macro_rules! scalar {
    ($($named:ident, $payload:ident => $tag:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $payload(mut self, v: $ty) -> Self {
                self.payload.extend_from_slice(&v.to_be_bytes());
                self
            }

            pub fn $named(self, name: &str, v: $ty) -> Self {
                self.tag(Tag::$tag).name(name).$payload(v)
            }
        )*
    };
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            payload: Vec::new(),
        }
    }

    pub fn tag(mut self, t: Tag) -> Self {
        self.payload.push(t.into());
        self
    }

    /// A length prefixed string in Java's modified UTF-8, as the game writes
    /// names.
    pub fn name(self, name: &str) -> Self {
        let name = cesu8::to_java_cesu8(name);
        self.raw_str_len(name.len()).raw_bytes(&name)
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.name(s)
    }

    scalar! {
        byte, byte_payload => Byte: i8,
        short, short_payload => Short: i16,
        int, int_payload => Int: i32,
        long, long_payload => Long: i64,
        float, float_payload => Float: f32,
        double, double_payload => Double: f64,
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.tag(Tag::String).name(name).string_payload(s)
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        bs.iter().fold(
            self.tag(Tag::ByteArray).name(name).int_payload(bs.len() as i32),
            |b, v| b.byte_payload(*v),
        )
    }

    pub fn int_array(self, name: &str, is: &[i32]) -> Self {
        is.iter().fold(
            self.tag(Tag::IntArray).name(name).int_payload(is.len() as i32),
            |b, v| b.int_payload(*v),
        )
    }

    pub fn long_array(self, name: &str, ls: &[i64]) -> Self {
        ls.iter().fold(
            self.tag(Tag::LongArray).name(name).int_payload(ls.len() as i32),
            |b, v| b.long_payload(*v),
        )
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Tag::Compound).name(name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    /// Compounds inside lists have no tag or name. Purely to make tests read
    /// better.
    pub fn start_anon_compound(self) -> Self {
        self
    }

    pub fn end_anon_compound(self) -> Self {
        self.tag(Tag::End)
    }

    pub fn start_list(self, name: &str, element: Tag, size: i32) -> Self {
        self.tag(Tag::List).name(name).start_anon_list(element, size)
    }

    /// A list nested in another list: element tag and size only.
    pub fn start_anon_list(self, element: Tag, size: i32) -> Self {
        self.tag(element).int_payload(size)
    }

    pub fn raw_str_len(mut self, len: usize) -> Self {
        self.payload.extend_from_slice(&(len as u16).to_be_bytes());
        self
    }

    /// Append bytes as is, for input no other method can produce.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}
