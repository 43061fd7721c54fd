/// Generates a closed AST enum, one struct per node kind, and a `Visitor`
/// trait whose `accept` dispatch covers every node kind.
///
/// ```text
/// generate_ast!(
///     Expr,
///     [
///         Binary => visit_binary_expr { left: Box<Expr>, op: Token, right: Box<Expr> };
///         Variable => visit_variable_expr { name: Token };
///     ]
/// );
/// ```
macro_rules! generate_ast {
    (
        $name:ident,
        [$($typename:ident => $visitname:ident { $($propname:ident: $proptype:ty),* });+ $(;)?]
    ) => {
        #[derive(Debug, PartialEq)]
        pub enum $name {
            $($typename($typename)),+
        }

        $(
            #[derive(Debug, PartialEq)]
            pub struct $typename {
                $(pub(crate) $propname: $proptype),*
            }
        )+

        pub(crate) trait Visitor<T> {
            $(fn $visitname(&mut self, node: &$typename) -> T;)+
        }

        impl $name {
            pub(crate) fn accept<T, V: Visitor<T>>(&self, v: &mut V) -> T {
                match self {
                    $($name::$typename(node) => v.$visitname(node),)+
                }
            }
        }
    };
}
