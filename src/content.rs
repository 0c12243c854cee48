//! Conversion of laid out page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::font::FontFace;
use crate::page::{ImageLayout, LineLayout, PageContents, RectLayout, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to an (uncompressed) PDF content stream.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<FontFace>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Image(image) => render_image(&mut content, image)?,
            PageContents::Line(line) => render_line(&mut content, line)?,
            PageContents::Rectangle(rect) => render_rect(&mut content, rect)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<FontFace>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in fonts[current_font.id].encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_image(content: &mut Vec<u8>, image: &ImageLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(
        content,
        "{} 0 0 {} {} {} cm\n",
        image.position.width(),
        image.position.height(),
        image.position.x1,
        image.position.y1
    )?;
    write!(content, "/I{} Do\n", image.image_id.index())?;
    write!(content, "Q\n")
}

#[allow(clippy::write_with_newline)]
fn render_line(content: &mut Vec<u8>, line: &LineLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", line.thickness)?;
    write_stroke_colour(content, line.colour)?;
    write!(content, "{} {} m\n", line.from.0, line.from.1)?;
    write!(content, "{} {} l\n", line.to.0, line.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")
}

#[allow(clippy::write_with_newline)]
fn render_rect(content: &mut Vec<u8>, rect: &RectLayout) -> Result<(), std::io::Error> {
    if rect.fill.is_none() && rect.stroke.is_none() {
        return Ok(());
    }

    write!(content, "q\n")?;
    if let Some(fill) = rect.fill {
        write_fill_colour(content, fill)?;
    }
    if let Some((stroke, thickness)) = rect.stroke {
        write!(content, "{} w\n", thickness)?;
        write_stroke_colour(content, stroke)?;
    }
    write!(
        content,
        "{} {} {} {} re\n",
        rect.position.x1,
        rect.position.y1,
        rect.position.width(),
        rect.position.height()
    )?;
    let operator = match (rect.fill, rect.stroke) {
        (Some(_), Some(_)) => "B",
        (Some(_), None) => "f",
        _ => "S",
    };
    write!(content, "{operator}\n")?;
    write!(content, "Q\n")
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
