use pulldown_cmark::{Event, HeadingLevel, MetadataBlockKind, Options, Parser, Tag, TagEnd};

/// What the index needs from a markdown source file
#[derive(Debug, Default)]
pub(crate) struct ParsedSource {
    /// Raw YAML between the `---` fences
    pub frontmatter: Option<String>,
    /// Text of the first level-1 heading
    pub heading: Option<String>,
    /// Plain text of the first paragraph of the body
    pub first_paragraph: Option<String>,
}

pub(crate) fn parse_source(text: &str) -> ParsedSource {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut parsed = ParsedSource::default();

    let mut in_frontmatter = false;
    let mut frontmatter = String::new();
    let mut heading: Option<String> = None;
    let mut paragraph: Option<String> = None;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = true;
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = false;
                parsed.frontmatter = Some(std::mem::take(&mut frontmatter));
            }

            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if parsed.heading.is_none() => {
                heading = Some(String::new());
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if let Some(text) = heading.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        parsed.heading = Some(text.to_string());
                    }
                }
            }

            Event::Start(Tag::Paragraph) if parsed.first_paragraph.is_none() => {
                paragraph = Some(String::new());
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some(text) = paragraph.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        parsed.first_paragraph = Some(text.to_string());
                    }
                }
            }

            Event::Text(t) | Event::Code(t) => {
                if in_frontmatter {
                    frontmatter.push_str(&t);
                } else if let Some(buf) = heading.as_mut() {
                    buf.push_str(&t);
                } else if let Some(buf) = paragraph.as_mut() {
                    buf.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buf) = paragraph.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    parsed
}
