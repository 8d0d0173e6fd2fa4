use std::rc::Rc;

use shared::User;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminViewProps {
    pub users: Rc<Vec<User>>,
    pub loading: bool,
    pub on_fetch: Callback<MouseEvent>,
}

#[function_component(AdminView)]
pub fn admin_view(props: &AdminViewProps) -> Html {
    html! {
        <section class="card wide">
            <div class="card-header">
                <div>
                    <h2>{"Admin · Users"}</h2>
                    <p>{"GET /api/users"}</p>
                </div>
                <button class="secondary" onclick={props.on_fetch.clone()} disabled={props.loading}>
                    {if props.loading { "Fetching..." } else { "Fetch users" }}
                </button>
            </div>
            {if props.users.is_empty() {
                html! { <p class="muted">{"No users loaded yet."}</p> }
            } else {
                html! {
                    <div class="table-wrapper">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"ID"}</th>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Currency"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.users.iter().map(|user| html! {
                                    <tr key={user.id}>
                                        <td>{user.id}</td>
                                        <td>{user.full_name()}</td>
                                        <td>{&user.email}</td>
                                        <td>{&user.currency}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
