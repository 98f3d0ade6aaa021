/// Build a [`Field`](crate::Field) for a named field of a struct.
///
/// The field is resolved at compile time: a misspelled name fails to build,
/// and the field's declared type becomes the `V` of the reference.
///
/// ```
/// use slashconfig::{IntoConfigurable, field};
///
/// #[derive(Clone)]
/// struct Shuttle {
///     name: String,
///     seats: u8,
/// }
///
/// let shuttle = Shuttle { name: "Galileo".to_string(), seats: 6 };
/// let larger = shuttle.configurable().setter(field!(Shuttle, seats))(8);
/// assert_eq!(larger.seats, 8);
/// assert_eq!(larger.name, "Galileo");
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $name:ident) => {
        $crate::Field::<$ty, _>::new(
            ::core::stringify!($name),
            |value| &value.$name,
            |value| &mut value.$name,
        )
    };
}

/// Generate one associated function per listed field, each returning the
/// [`Field`](crate::Field) for that field.
///
/// Field and function share a name, so `Shuttle::seats()` designates
/// `Shuttle.seats`.
///
/// ```
/// use slashconfig::{IntoConfigurable, fields};
///
/// #[derive(Clone)]
/// struct Shuttle {
///     name: String,
///     seats: u8,
/// }
///
/// fields! {
///     Shuttle {
///         pub name: String,
///         pub seats: u8,
///     }
/// }
///
/// let shuttle = Shuttle { name: "Galileo".to_string(), seats: 6 };
/// let renamed = shuttle.configurable().mapper(Shuttle::name())(|name| format!("{name} II"));
/// assert_eq!(renamed.name, "Galileo II");
/// ```
#[macro_export]
macro_rules! fields {
    ($ty:ident { $($vis:vis $name:ident : $field_ty:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[allow(dead_code)]
                $vis fn $name() -> $crate::Field<Self, $field_ty> {
                    $crate::field!(Self, $name)
                }
            )*
        }
    };
}
