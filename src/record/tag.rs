use bitflags::bitflags;

/// Tag name that excludes a field from the output.
pub const SKIP: &str = "-";

const OMIT_EMPTY_OPTION: &str = "omitempty";

/// Field annotation, either in the conventional `key:"value" key2:"value2"`
/// form (e.g. `url:"name,omitempty" json:"name"`) or as already split
/// `(key, value)` pairs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StructTag(Repr);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Repr {
    Raw(&'static str),
    Pairs(&'static [(&'static str, &'static str)]),
}

impl Default for StructTag {
    fn default() -> Self {
        StructTag(Repr::Raw(""))
    }
}

impl StructTag {
    pub const fn new(raw: &'static str) -> StructTag {
        StructTag(Repr::Raw(raw))
    }

    /// Pairs are taken verbatim, values need no quoting or escaping.
    pub const fn from_pairs(pairs: &'static [(&'static str, &'static str)]) -> StructTag {
        StructTag(Repr::Pairs(pairs))
    }

    pub fn is_empty(&self) -> bool {
        match self.0 {
            Repr::Raw(raw) => raw.trim().is_empty(),
            Repr::Pairs(pairs) => pairs.is_empty(),
        }
    }

    /// Value stored under `key`, or the empty string.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Value stored under `key`. A malformed annotation ends the scan, so
    /// keys after the first syntax error are never found.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match self.0 {
            Repr::Raw(raw) => lookup_raw(raw, key),
            Repr::Pairs(pairs) => pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string()),
        }
    }
}

fn lookup_raw(raw: &str, key: &str) -> Option<String> {
    let mut tag = raw;

    while !tag.is_empty() {
        tag = tag.trim_start_matches(' ');

        if tag.is_empty() {
            break;
        }

        let bytes = tag.as_bytes();
        let name_len = bytes
            .iter()
            .take_while(|&&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
            .count();

        if name_len == 0
            || name_len + 1 >= bytes.len()
            || bytes[name_len] != b':'
            || bytes[name_len + 1] != b'"'
        {
            break;
        }

        let name = &tag[..name_len];
        tag = &tag[name_len + 1..];

        let bytes = tag.as_bytes();
        let mut i = 1;

        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }

        if i >= bytes.len() {
            break;
        }

        let quoted = &tag[..=i];
        tag = &tag[i + 1..];

        if name == key {
            return unquote(quoted);
        }
    }

    None
}

fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        match chars.next()? {
            '"' => value.push('"'),
            '\\' => value.push('\\'),
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            _ => return None,
        }
    }

    Some(value)
}

bitflags! {
    /// Options that follow the name in a tag value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct TagOptions: u8 {
        const OMIT_EMPTY = 0x01;
    }
}

impl TagOptions {
    fn parse(options: &str) -> TagOptions {
        options
            .split(',')
            .fold(TagOptions::empty(), |flags, option| match option {
                OMIT_EMPTY_OPTION => flags | TagOptions::OMIT_EMPTY,
                _ => flags,
            })
    }
}

/// A tag value split into its output name and options: `name[,opt,...]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    options: TagOptions,
}

impl<'a> Tag<'a> {
    pub fn parse(tag: &'a str) -> Tag<'a> {
        match tag.split_once(',') {
            Some((name, options)) => Tag {
                name,
                options: TagOptions::parse(options),
            },
            None => Tag {
                name: tag,
                options: TagOptions::empty(),
            },
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn options(&self) -> TagOptions {
        self.options
    }

    pub fn is_skipped(&self) -> bool {
        self.name == SKIP
    }

    pub fn omit_empty(&self) -> bool {
        self.options.contains(TagOptions::OMIT_EMPTY)
    }
}
