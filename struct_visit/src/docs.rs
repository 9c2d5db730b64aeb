/*!
Documentation for macros,and guides.
*/

pub mod visitable_macro;
