macro_rules! spanned_err {
    ( $spanned:expr, $($fmt:tt)* ) => {
        syn::Error::new_spanned(&$spanned, format!($($fmt)*))
    };
}

macro_rules! return_spanned_err {
    ( $spanned:expr, $($fmt:tt)* ) => {
        return Err(spanned_err!($spanned, $($fmt)*))
    };
}
