use pdf_writer::{Finish, Pdf, Ref, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// A flat document outline; letters only ever need one level of bookmarks
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String) {
        self.entries.push(OutlineEntry { page_index, title });
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Ref {
        let outlines_id = refs.gen(RefType::Outlines);
        let entry_ids: Vec<Ref> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        if let (Some(first), Some(last)) = (entry_ids.first(), entry_ids.last()) {
            outline.first(*first);
            outline.last(*last);
            outline.count(entry_ids.len() as i32);
        }
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_ref) = refs.get(RefType::Page(entry.page_index)) else {
                continue;
            };

            let mut item = writer.outline_item(entry_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(entry_ids[i - 1]);
            }
            if let Some(next) = entry_ids.get(i + 1) {
                item.next(*next);
            }
            item.dest().page(page_ref).fit();
        }

        outlines_id
    }
}
