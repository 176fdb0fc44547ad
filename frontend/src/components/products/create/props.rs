use common::model::user::CurrentUser;
use yew::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCreateProps {
    /// Identity stamped into the `usuario` field of the submitted product.
    pub current_user: CurrentUser,
    pub on_navigate: Callback<Route>,
}
