//! Runtime type identity for type-based filtering.
//!
//! [`filter_is_a`](super::OptionLike::filter_is_a) and
//! [`filter_is_one_of`](super::OptionLike::filter_is_one_of) compare the
//! runtime type of a contained value against one or more [`TypeTag`]s.
//!
//! - [`RuntimeType`] reports the tag of a value and decides whether the value
//!   "is a" given tag. Types may override [`RuntimeType::is_a`] to declare
//!   super types.
//! - [`TypeSelector`] is the single capability for "a tag, or a sequence of
//!   selectors". Selectors nest to arbitrary depth and are flattened before
//!   matching.
//!
//! # Examples
//!
//! ```rust
//! use maybers::option::{TypeSelector, TypeTag, TypeTree};
//! use maybers::type_tags;
//!
//! let nested = vec![vec![TypeTag::of::<String>()], vec![TypeTag::of::<i32>()]];
//! assert_eq!(nested.flatten().len(), 2);
//!
//! let tree = TypeTree::group([
//!     TypeTree::from(TypeTag::of::<u8>()),
//!     TypeTree::group([TypeTree::from(TypeTag::of::<bool>())]),
//! ]);
//! assert_eq!(tree.flatten(), type_tags![u8, bool].to_vec());
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The runtime identity of a Rust type.
///
/// Two tags are equal when their [`TypeId`]s are equal; the name is kept for
/// diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::option::TypeTag;
    ///
    /// assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
    /// assert_ne!(TypeTag::of::<String>(), TypeTag::of::<&str>());
    /// ```
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Builds a tag from a [`TypeId`] discovered at runtime.
    #[inline]
    pub const fn from_id(id: TypeId, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Returns the [`TypeId`] of the tagged type.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the tagged type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// Builds an array of [`TypeTag`]s from a list of types.
///
/// # Examples
///
/// ```rust
/// use maybers::option::TypeTag;
/// use maybers::type_tags;
///
/// let tags = type_tags![String, i32];
/// assert_eq!(tags, [TypeTag::of::<String>(), TypeTag::of::<i32>()]);
/// ```
#[macro_export]
macro_rules! type_tags {
    ($($type:ty),* $(,)?) => {
        [$($crate::option::TypeTag::of::<$type>()),*]
    };
}

// =============================================================================
// RuntimeType
// =============================================================================

/// A value that can report its runtime type.
///
/// The default implementation reports the static type of the implementor
/// and matches a tag exactly. Override [`is_a`](RuntimeType::is_a) to let a
/// type also match the tags of its super types.
///
/// # Examples
///
/// ```rust
/// use maybers::option::{RuntimeType, TypeTag};
///
/// struct Animal;
/// struct Dog;
///
/// impl RuntimeType for Animal {}
///
/// impl RuntimeType for Dog {
///     fn is_a(&self, tag: &TypeTag) -> bool {
///         *tag == self.runtime_type() || *tag == TypeTag::of::<Animal>()
///     }
/// }
///
/// assert!(Dog.is_a(&TypeTag::of::<Animal>()));
/// assert!(!Animal.is_a(&TypeTag::of::<Dog>()));
/// ```
pub trait RuntimeType: Any {
    /// Returns the tag of the value's runtime type.
    fn runtime_type(&self) -> TypeTag {
        TypeTag::of::<Self>()
    }

    /// Returns `true` if the value is an instance of the tagged type.
    fn is_a(&self, tag: &TypeTag) -> bool {
        self.runtime_type() == *tag
    }
}

macro_rules! impl_runtime_type {
    ($($type:ty),* $(,)?) => {
        $(impl RuntimeType for $type {})*
    };
}

impl_runtime_type!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: 'static> RuntimeType for Vec<T> {}

impl<T: 'static> RuntimeType for Option<T> {}

impl<K: 'static, V: 'static, S: 'static> RuntimeType for std::collections::HashMap<K, V, S> {}

impl RuntimeType for Box<dyn Any> {
    fn runtime_type(&self) -> TypeTag {
        TypeTag::from_id((**self).type_id(), "dyn Any")
    }
}

impl RuntimeType for Box<dyn Any + Send> {
    fn runtime_type(&self) -> TypeTag {
        TypeTag::from_id((**self).type_id(), "dyn Any + Send")
    }
}

// =============================================================================
// TypeSelector
// =============================================================================

/// A tag or an arbitrarily nested sequence of tags.
pub trait TypeSelector {
    /// Appends every tag of this selector, flattened, to `tags`.
    fn collect_tags(&self, tags: &mut Vec<TypeTag>);

    /// Returns every tag of this selector, flattened, in order.
    fn flatten(&self) -> Vec<TypeTag> {
        let mut tags = Vec::new();
        self.collect_tags(&mut tags);
        tags
    }
}

impl TypeSelector for TypeTag {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        tags.push(*self);
    }
}

impl<S: TypeSelector + ?Sized> TypeSelector for &S {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        (**self).collect_tags(tags);
    }
}

impl<S: TypeSelector + ?Sized> TypeSelector for Box<S> {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        (**self).collect_tags(tags);
    }
}

impl<S: TypeSelector> TypeSelector for [S] {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        for selector in self {
            selector.collect_tags(tags);
        }
    }
}

impl<S: TypeSelector, const N: usize> TypeSelector for [S; N] {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        self.as_slice().collect_tags(tags);
    }
}

impl<S: TypeSelector> TypeSelector for Vec<S> {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        self.as_slice().collect_tags(tags);
    }
}

macro_rules! impl_type_selector_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: TypeSelector),+> TypeSelector for ($($name,)+) {
            #[allow(non_snake_case)]
            fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
                let ($($name,)+) = self;
                $($name.collect_tags(tags);)+
            }
        }
    };
}

impl_type_selector_for_tuple!(A);
impl_type_selector_for_tuple!(A, B);
impl_type_selector_for_tuple!(A, B, C);
impl_type_selector_for_tuple!(A, B, C, D);
impl_type_selector_for_tuple!(A, B, C, D, E);
impl_type_selector_for_tuple!(A, B, C, D, E, F);
impl_type_selector_for_tuple!(A, B, C, D, E, F, G);
impl_type_selector_for_tuple!(A, B, C, D, E, F, G, H);

/// A selector over a cloneable iterator.
///
/// The iterator is cloned on every flatten, so the selector can be reused.
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Iterated, TypeSelector, TypeTag};
///
/// let tags = vec![TypeTag::of::<u8>(), TypeTag::of::<u16>()];
/// let selector = Iterated(tags.iter().filter(|tag| **tag != TypeTag::of::<u8>()));
///
/// assert_eq!(selector.flatten(), vec![TypeTag::of::<u16>()]);
/// assert_eq!(selector.flatten(), vec![TypeTag::of::<u16>()]);
/// ```
#[derive(Debug, Clone)]
pub struct Iterated<I>(pub I);

impl<I> TypeSelector for Iterated<I>
where
    I: Iterator + Clone,
    I::Item: TypeSelector,
{
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        for selector in self.0.clone() {
            selector.collect_tags(tags);
        }
    }
}

/// A heterogeneous tree of tags built at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTree {
    /// A single tag.
    Tag(TypeTag),
    /// A nested group of trees.
    Group(Vec<TypeTree>),
}

impl TypeTree {
    /// Builds a group from any collection of trees.
    pub fn group<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Group(children.into_iter().collect())
    }
}

impl From<TypeTag> for TypeTree {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag)
    }
}

impl<const N: usize> From<[TypeTag; N]> for TypeTree {
    fn from(tags: [TypeTag; N]) -> Self {
        Self::group(tags.into_iter().map(Self::Tag))
    }
}

impl TypeSelector for TypeTree {
    fn collect_tags(&self, tags: &mut Vec<TypeTag>) {
        // Depth-first with an explicit stack, children pushed in reverse to
        // keep the output in declaration order.
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Tag(tag) => tags.push(*tag),
                Self::Group(children) => pending.extend(children.iter().rev()),
            }
        }
    }
}

/// Returns `true` if `value` is any of the types named by `selector`.
pub fn is_one_of<V, S>(value: &V, selector: &S) -> bool
where
    V: RuntimeType + ?Sized,
    S: TypeSelector + ?Sized,
{
    selector.flatten().iter().any(|tag| value.is_a(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn tag_equality_ignores_name() {
        let left = TypeTag::of::<u32>();
        let right = TypeTag::from_id(TypeId::of::<u32>(), "renamed");
        assert_eq!(left, right);
    }

    #[rstest]
    fn primitive_reports_its_own_tag() {
        assert_eq!(42_i32.runtime_type(), TypeTag::of::<i32>());
        assert!("foo".to_string().is_a(&TypeTag::of::<String>()));
        assert!(!"foo".is_a(&TypeTag::of::<String>()));
    }

    #[rstest]
    fn boxed_any_reports_dynamic_tag() {
        let boxed: Box<dyn Any> = Box::new(7_u8);
        assert!(boxed.is_a(&TypeTag::of::<u8>()));
        assert!(!boxed.is_a(&TypeTag::of::<Box<dyn Any>>()));
    }

    #[rstest]
    fn nested_vectors_flatten_in_order() {
        let nested = vec![
            vec![vec![TypeTag::of::<u8>()]],
            vec![vec![TypeTag::of::<u16>(), TypeTag::of::<u32>()]],
        ];
        assert_eq!(nested.flatten(), type_tags![u8, u16, u32].to_vec());
    }

    #[rstest]
    fn tuple_selector_mixes_shapes() {
        let selector = (
            TypeTag::of::<u8>(),
            [TypeTag::of::<u16>()],
            vec![(TypeTag::of::<u32>(),)],
        );
        assert_eq!(selector.flatten(), type_tags![u8, u16, u32].to_vec());
    }

    #[rstest]
    fn type_tree_flattens_deep_nesting() {
        let mut tree = TypeTree::from(TypeTag::of::<bool>());
        for _ in 0..1_000 {
            tree = TypeTree::group([tree]);
        }
        assert_eq!(tree.flatten(), vec![TypeTag::of::<bool>()]);
    }

    #[rstest]
    fn boxed_dyn_selectors_are_heterogeneous() {
        let selectors: Vec<Box<dyn TypeSelector>> = vec![
            Box::new(TypeTag::of::<u8>()),
            Box::new(vec![[TypeTag::of::<i8>()]]),
        ];
        assert_eq!(selectors.flatten(), type_tags![u8, i8].to_vec());
    }

    #[rstest]
    fn is_one_of_matches_any_flattened_tag() {
        let selector = vec![type_tags![u8], type_tags![String]];
        assert!(is_one_of(&"x".to_string(), &selector));
        assert!(!is_one_of(&1_i64, &selector));
    }
}
