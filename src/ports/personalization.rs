// SPDX-License-Identifier: MIT OR Apache-2.0

//! Personalization tag source trait definition.
//!
//! A tags object is anything that can describe itself as an ordered list of
//! fields, each with a name, an optional override name and an optional value.
//! Structs declare this capability with [`personalization_tags!`]; plain lists
//! of `(name, value)` pairs implement it directly.
//!
//! [`personalization_tags!`]: crate::personalization_tags

/// One field of a tags object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagField {
    /// The field's own name
    pub name: String,
    /// Name to use instead of `name`, when set and non-empty
    pub override_name: Option<String>,
    /// The field's value rendered as a string
    pub value: Option<String>,
}

impl TagField {
    /// Creates a new field descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use transact_client::ports::TagField;
    ///
    /// let field = TagField::new("Tag1", Some("special"), Some("v1".to_string()));
    /// assert_eq!(field.override_name.as_deref(), Some("special"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        override_name: Option<&str>,
        value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            override_name: override_name.map(str::to_string),
            value,
        }
    }
}

/// A shape that can enumerate its personalization fields.
///
/// Implementations must return fields in declaration order and must not
/// drop fields whose value is absent.
///
/// # Examples
///
/// ```rust
/// use transact_client::ports::{PersonalizationTagSource, TagField};
///
/// struct OrderTags {
///     order_id: u64,
/// }
///
/// impl PersonalizationTagSource for OrderTags {
///     fn personalization_fields(&self) -> Vec<TagField> {
///         vec![TagField::new("OrderId", None, Some(self.order_id.to_string()))]
///     }
/// }
///
/// let fields = OrderTags { order_id: 7 }.personalization_fields();
/// assert_eq!(fields[0].value.as_deref(), Some("7"));
/// ```
pub trait PersonalizationTagSource {
    /// Returns the fields of this tags object in declaration order.
    fn personalization_fields(&self) -> Vec<TagField>;
}

/// Conversion of a field value into a tag value.
///
/// Plain values always produce `Some`; `Option` fields produce `None` when
/// empty.
pub trait TagValue {
    /// Renders the value, or returns `None` when it is absent.
    fn to_tag_value(&self) -> Option<String>;
}

macro_rules! impl_tag_value_via_to_string {
    ($($t:ty),* $(,)?) => {
        $(
            impl TagValue for $t {
                fn to_tag_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_tag_value_via_to_string!(
    String, str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: TagValue + ?Sized> TagValue for &T {
    fn to_tag_value(&self) -> Option<String> {
        (**self).to_tag_value()
    }
}

impl<T: TagValue> TagValue for Option<T> {
    fn to_tag_value(&self) -> Option<String> {
        self.as_ref().and_then(TagValue::to_tag_value)
    }
}

impl<K: AsRef<str>, V: TagValue> PersonalizationTagSource for [(K, V)] {
    fn personalization_fields(&self) -> Vec<TagField> {
        self.iter()
            .map(|(name, value)| {
                let name: &str = name.as_ref();
                TagField::new(name, None, value.to_tag_value())
            })
            .collect()
    }
}

impl<K: AsRef<str>, V: TagValue, const N: usize> PersonalizationTagSource for [(K, V); N] {
    fn personalization_fields(&self) -> Vec<TagField> {
        self[..].personalization_fields()
    }
}

impl<K: AsRef<str>, V: TagValue> PersonalizationTagSource for Vec<(K, V)> {
    fn personalization_fields(&self) -> Vec<TagField> {
        self[..].personalization_fields()
    }
}

/// Declares a struct usable as a personalization tags object.
///
/// Fields are emitted as tags in declaration order, named after the field
/// identifier verbatim. A field marked `#[tag_name = "..."]` uses that name
/// instead. Field types must implement [`TagValue`]; `Option` fields that are
/// `None` produce tags without a value.
///
/// # Examples
///
/// ```
/// use transact_client::personalization_tags;
/// use transact_client::ports::PersonalizationTagSource;
///
/// personalization_tags! {
///     #[derive(Default)]
///     pub struct WelcomeTags {
///         #[tag_name = "First Name"]
///         pub first_name: Option<String>,
///         pub plan: String,
///     }
/// }
///
/// let tags = WelcomeTags { first_name: None, plan: "pro".to_string() };
/// let fields = tags.personalization_fields();
/// assert_eq!(fields[0].override_name.as_deref(), Some("First Name"));
/// assert_eq!(fields[0].value, None);
/// assert_eq!(fields[1].name, "plan");
/// ```
#[macro_export]
macro_rules! personalization_tags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[tag_name = $override:literal])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($field_vis $field: $ty),*
        }

        impl $crate::ports::PersonalizationTagSource for $name {
            fn personalization_fields(&self) -> ::std::vec::Vec<$crate::ports::TagField> {
                ::std::vec![
                    $(
                        $crate::ports::TagField::new(
                            ::std::stringify!($field),
                            $crate::__tag_name_override!($($override)?),
                            $crate::ports::TagValue::to_tag_value(&self.$field),
                        )
                    ),*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __tag_name_override {
    () => {
        ::std::option::Option::None
    };
    ($override:literal) => {
        ::std::option::Option::Some($override)
    };
}
