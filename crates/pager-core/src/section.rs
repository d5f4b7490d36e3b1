//! Section geometry as seen by the resolver.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDescriptor {
    pub index: u32,
    pub top_offset: f32,
    pub height: f32,
}

impl SectionDescriptor {
    pub fn new(index: u32, top_offset: f32, height: f32) -> Self {
        Self {
            index,
            top_offset,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top_offset + self.height
    }
}

/// Read-only source of the current section layout.
pub trait SectionRegistry {
    fn list_sections(&self) -> &[SectionDescriptor];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSnapshot {
    sections: Vec<SectionDescriptor>,
}

impl SectionSnapshot {
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        Self { sections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.index == index)
    }
}

impl SectionRegistry for SectionSnapshot {
    fn list_sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }
}

impl SectionRegistry for [SectionDescriptor] {
    fn list_sections(&self) -> &[SectionDescriptor] {
        self
    }
}

impl SectionRegistry for Vec<SectionDescriptor> {
    fn list_sections(&self) -> &[SectionDescriptor] {
        self
    }
}

/// Builds contiguous descriptors from ordered section heights.
///
/// Sections are stacked top to bottom starting at `leading`, with `gap`
/// pixels between neighbours. Non-finite or negative heights are measured
/// as zero.
#[derive(Debug, Clone, Default)]
pub struct StackedLayout {
    leading: f32,
    gap: f32,
    entries: Vec<StackedEntry>,
}

#[derive(Debug, Clone, Copy)]
struct StackedEntry {
    height: f32,
    navigable: bool,
}

impl StackedLayout {
    pub fn new(leading: f32, gap: f32) -> Self {
        Self {
            leading: non_negative(leading),
            gap: non_negative(gap),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, height: f32) -> &mut Self {
        self.push_with_nav(height, true)
    }

    /// Appends a section; `navigable = false` keeps it in the flow but out
    /// of [`StackedLayout::navigation_snapshot`].
    pub fn push_with_nav(&mut self, height: f32, navigable: bool) -> &mut Self {
        self.entries.push(StackedEntry {
            height: non_negative(height),
            navigable,
        });
        self
    }

    pub fn offsets(&self) -> Vec<f32> {
        let mut offsets = Vec::with_capacity(self.entries.len());
        let mut cursor = self.leading;
        for (position, entry) in self.entries.iter().enumerate() {
            if position > 0 {
                cursor += self.gap;
            }
            offsets.push(cursor);
            cursor += entry.height;
        }
        offsets
    }

    pub fn total_height(&self) -> f32 {
        let offsets = self.offsets();
        match offsets.last().zip(self.entries.last()) {
            Some((top, entry)) => top + entry.height,
            None => self.leading,
        }
    }

    pub fn snapshot(&self) -> SectionSnapshot {
        self.collect(|_| true)
    }

    /// Navigable sections only, re-indexed 1..=m.
    pub fn navigation_snapshot(&self) -> SectionSnapshot {
        self.collect(|entry| entry.navigable)
    }

    fn collect(&self, keep: impl Fn(&StackedEntry) -> bool) -> SectionSnapshot {
        let sections = self
            .offsets()
            .into_iter()
            .zip(&self.entries)
            .filter(|(_, entry)| keep(entry))
            .enumerate()
            .map(|(position, (top, entry))| {
                SectionDescriptor::new(position as u32 + 1, top, entry.height)
            })
            .collect();
        SectionSnapshot::new(sections)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
