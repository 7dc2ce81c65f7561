use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub title: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &Props) -> Html {
    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
        })
    };

    html! {
        <nav class="flex justify-between items-center mb-4">
            <h1 class="text-2xl font-bold">{ props.title.as_str() }</h1>
            <button
                onclick={on_logout_click}
                class="px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700">
                { "Logout" }
            </button>
        </nav>
    }
}
