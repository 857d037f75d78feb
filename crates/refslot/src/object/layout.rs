//! Class Layout - Field Tables and Offset Computation
//!
//! A [`ClassLayout`] is the per-type description the resolver works
//! from: the ordered list of declared fields and their byte offsets
//! inside a container block.
//!
//! Object Block Layout:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Header (config.header_size)       │  <- reserved, zeroed
//! ├─────────────────────────────────────────┤
//! │         Field 0 (1 word)                 │  <- header_size
//! ├─────────────────────────────────────────┤
//! │         Field 1 (1 word)                 │  <- header_size + 8
//! ├─────────────────────────────────────────┤
//! │                  ...                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every field occupies exactly one reference word, whether it is a
//! reference slot or a primitive word, so offsets are a pure function
//! of declaration order. Offsets are stable for the lifetime of the
//! layout and word-aligned by construction.

use crate::config::LayoutConfig;
use crate::error::{Result, SlotError};

/// Size of one reference word in bytes
pub const REF_SIZE: usize = std::mem::size_of::<usize>();

/// Power-of-two exponent of [`REF_SIZE`]
///
/// `index << REF_SHIFT` is the byte distance of element `index` from
/// element 0. The stride is a power of two by definition, which is why
/// element addressing is expressed as a shift rather than a multiply.
pub const REF_SHIFT: u32 = REF_SIZE.trailing_zeros();

/// Kind of a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Holds a reference word; resolvable through this layer
    Reference,
    /// Holds a primitive word; declared for layout purposes only
    Word,
}

/// One declared field with its computed offset
#[derive(Debug, Clone)]
struct FieldSlot {
    name: String,
    kind: FieldKind,
    offset: usize,
}

/// Per-type layout: field tables with computed byte offsets
///
/// Built once via [`ClassLayout::builder`] and shared (typically in an
/// `Arc`) between every instance of the type, the static-storage
/// registry, and the resolver.
///
/// # Examples
///
/// ```rust
/// use refslot::ClassLayout;
///
/// let layout = ClassLayout::builder("Node")
///     .ref_field("next")
///     .ref_field("value")
///     .word_field("hash")
///     .build()?;
///
/// let next = layout.field_offset("next")?;
/// let value = layout.field_offset("value")?;
/// assert_eq!(value, next + std::mem::size_of::<usize>());
/// # Ok::<(), refslot::SlotError>(())
/// ```
#[derive(Debug)]
pub struct ClassLayout {
    name: String,
    config: LayoutConfig,
    fields: Vec<FieldSlot>,
    static_fields: Vec<FieldSlot>,
    instance_size: usize,
    static_size: usize,
}

impl ClassLayout {
    /// Start building a layout for the named class
    pub fn builder(name: &str) -> ClassLayoutBuilder {
        ClassLayoutBuilder {
            name: name.to_string(),
            config: LayoutConfig::default(),
            fields: Vec::new(),
            static_fields: Vec::new(),
        }
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layout geometry this class was built with
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Total instance block size in bytes, header included
    pub fn instance_size(&self) -> usize {
        self.instance_size
    }

    /// Size of the class-level static block in bytes
    pub fn static_size(&self) -> usize {
        self.static_size
    }

    /// Byte offset of an instance reference field
    ///
    /// The offset is stable per type: it is valid for every instance
    /// of this layout, relative to that instance's base address.
    pub fn field_offset(&self, field: &str) -> Result<usize> {
        Self::offset_in(&self.fields, &self.name, field)
    }

    /// Byte offset of a class-level reference field
    ///
    /// Relative to the class's static-storage block, not to any
    /// instance.
    pub fn static_field_offset(&self, field: &str) -> Result<usize> {
        Self::offset_in(&self.static_fields, &self.name, field)
    }

    fn offset_in(table: &[FieldSlot], class: &str, field: &str) -> Result<usize> {
        match table.iter().find(|f| f.name == field) {
            Some(slot) if slot.kind == FieldKind::Reference => Ok(slot.offset),
            Some(_) => Err(SlotError::NotAReference {
                class: class.to_string(),
                field: field.to_string(),
            }),
            None => Err(SlotError::UnknownField {
                class: class.to_string(),
                field: field.to_string(),
            }),
        }
    }
}

/// Builder for [`ClassLayout`]
pub struct ClassLayoutBuilder {
    name: String,
    config: LayoutConfig,
    fields: Vec<(String, FieldKind)>,
    static_fields: Vec<(String, FieldKind)>,
}

impl ClassLayoutBuilder {
    /// Use a custom layout geometry instead of the default
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Declare an instance reference field
    pub fn ref_field(mut self, name: &str) -> Self {
        self.fields.push((name.to_string(), FieldKind::Reference));
        self
    }

    /// Declare an instance primitive-word field
    ///
    /// Takes part in offset computation but cannot be resolved to a
    /// reference slot.
    pub fn word_field(mut self, name: &str) -> Self {
        self.fields.push((name.to_string(), FieldKind::Word));
        self
    }

    /// Declare a class-level reference field
    pub fn static_ref_field(mut self, name: &str) -> Self {
        self.static_fields
            .push((name.to_string(), FieldKind::Reference));
        self
    }

    /// Declare a class-level primitive-word field
    pub fn static_word_field(mut self, name: &str) -> Self {
        self.static_fields.push((name.to_string(), FieldKind::Word));
        self
    }

    /// Validate geometry, compute offsets, and produce the layout
    pub fn build(self) -> Result<ClassLayout> {
        self.config.validate()?;

        let fields = Self::place(&self.name, self.fields, self.config.header_size)?;
        // Static blocks carry no header; offsets start at zero.
        let static_fields = Self::place(&self.name, self.static_fields, 0)?;

        let instance_size = self.config.header_size + fields.len() * REF_SIZE;
        let static_size = static_fields.len() * REF_SIZE;

        Ok(ClassLayout {
            name: self.name,
            config: self.config,
            fields,
            static_fields,
            instance_size,
            static_size,
        })
    }

    fn place(
        class: &str,
        declared: Vec<(String, FieldKind)>,
        start: usize,
    ) -> Result<Vec<FieldSlot>> {
        let mut table: Vec<FieldSlot> = Vec::with_capacity(declared.len());
        for (i, (name, kind)) in declared.into_iter().enumerate() {
            if table.iter().any(|f| f.name == name) {
                return Err(SlotError::DuplicateField {
                    class: class.to_string(),
                    field: name,
                });
            }
            table.push(FieldSlot {
                name,
                kind,
                offset: start + i * REF_SIZE,
            });
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_size_is_power_of_two() {
        assert!(REF_SIZE.is_power_of_two());
        assert_eq!(1usize << REF_SHIFT, REF_SIZE);
    }

    #[test]
    fn test_field_offsets_follow_declaration_order() {
        let layout = ClassLayout::builder("Pair")
            .ref_field("first")
            .ref_field("second")
            .build()
            .unwrap();

        let header = layout.config().header_size;
        assert_eq!(layout.field_offset("first").unwrap(), header);
        assert_eq!(layout.field_offset("second").unwrap(), header + REF_SIZE);
        assert_eq!(layout.instance_size(), header + 2 * REF_SIZE);
    }

    #[test]
    fn test_word_fields_take_space_but_do_not_resolve() {
        let layout = ClassLayout::builder("Mixed")
            .word_field("count")
            .ref_field("value")
            .build()
            .unwrap();

        assert_eq!(
            layout.field_offset("value").unwrap(),
            layout.config().header_size + REF_SIZE
        );
        assert!(matches!(
            layout.field_offset("count"),
            Err(SlotError::NotAReference { .. })
        ));
    }

    #[test]
    fn test_unknown_field() {
        let layout = ClassLayout::builder("Empty").build().unwrap();
        assert!(matches!(
            layout.field_offset("nope"),
            Err(SlotError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = ClassLayout::builder("Dup")
            .ref_field("v")
            .word_field("v")
            .build();
        assert!(matches!(result, Err(SlotError::DuplicateField { .. })));
    }

    #[test]
    fn test_static_offsets_start_at_zero() {
        let layout = ClassLayout::builder("Statics")
            .static_ref_field("a")
            .static_ref_field("b")
            .build()
            .unwrap();

        assert_eq!(layout.static_field_offset("a").unwrap(), 0);
        assert_eq!(layout.static_field_offset("b").unwrap(), REF_SIZE);
        assert_eq!(layout.static_size(), 2 * REF_SIZE);
    }

    #[test]
    fn test_instance_and_static_tables_are_independent() {
        let layout = ClassLayout::builder("Split")
            .ref_field("v")
            .static_ref_field("v")
            .build()
            .unwrap();

        assert_eq!(layout.field_offset("v").unwrap(), layout.config().header_size);
        assert_eq!(layout.static_field_offset("v").unwrap(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LayoutConfig {
            header_size: 13,
            ..Default::default()
        };
        let result = ClassLayout::builder("Bad").with_config(config).build();
        assert!(matches!(result, Err(SlotError::Configuration(_))));
    }
}
