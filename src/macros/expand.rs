/// Expands operator templates for a specific ISA and element type.
///
/// This macro is "Layer 3" of the architecture. It takes a module name, an
/// ISA identifier and an element type, and generates a module containing all
/// operator implementations for that combination.
#[macro_export]
macro_rules! expand_isa_impls {
    ($module_name:ident, $isa:ident, $elem:ident) => {
        pub mod $module_name {
            $crate::define_arith_ops!($isa, $elem);
        }
    };
}
