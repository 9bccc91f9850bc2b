//! Application shell: router, guarded switch, and shared contexts.

use crate::app::api::ApiCtx;
use crate::app::storage::api_base_url;
use crate::components::guard::Guarded;
use crate::components::toast::ToastOutlet;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod storage;
pub(crate) mod store;

/// Mount the application into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<BiblioApp>::new().render();
}

/// Root component: installs the router around everything else.
#[function_component(BiblioApp)]
fn biblio_app() -> Html {
    html! {
        <BrowserRouter>
            <AppFrame />
        </BrowserRouter>
    }
}

/// Everything that needs router context: the API client singleton, the
/// guarded route switch, and the toast outlet.
#[function_component(AppFrame)]
fn app_frame() -> Html {
    let Some(navigator) = use_navigator() else {
        return Html::default();
    };
    let api = use_memo(move |_| ApiCtx::new(api_base_url(), navigator), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api).clone()}>
            <Switch<Route> render={switch} />
            <ToastOutlet />
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guarded route={route} /> }
}
