use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="not-found">
                <h1>{"Page Not Found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home}>{"Go back to Home"}</Link<Route>>
            </div>
        </div>
    }
}
