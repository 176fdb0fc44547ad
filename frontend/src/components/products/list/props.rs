use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductListProps {
    pub on_navigate: Callback<Route>,
}
