use dioxus::prelude::*;
use records::{humanize, RecordCollection, RecordId};

use crate::icons::FaTrashCan;
use crate::{Icon, RECORDS_CSS};

/// Listing table: one column per field, a link to each user, and a delete
/// control. Deleting only asks; the owner removes the row once the server
/// confirms.
#[component]
pub fn RecordTable(
    users: RecordCollection,
    on_select: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
    #[props(default)] deleting: Option<RecordId>,
) -> Element {
    let columns = users.columns();
    let rows: Vec<(RecordId, Vec<String>, String)> = users
        .iter()
        .filter_map(|record| {
            let id = record.id?;
            let cells = columns.iter().map(|c| record.display(c)).collect();
            let name = record.display("name");
            let link = if name.is_empty() { format!("user {id}") } else { name };
            Some((id, cells, link))
        })
        .collect();

    rsx! {
        document::Stylesheet { href: RECORDS_CSS }
        table {
            class: "record-table",
            thead {
                tr {
                    for column in columns.iter() {
                        th { key: "{column}", {humanize(column)} }
                    }
                    th {}
                    th {}
                }
            }
            tbody {
                for (id, cells, link) in rows {
                    tr {
                        key: "{id}",
                        for (i, cell) in cells.into_iter().enumerate() {
                            td { key: "{i}", "{cell}" }
                        }
                        td {
                            a {
                                href: "/user/{id}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_select.call(id);
                                },
                                "{link}"
                            }
                        }
                        td {
                            button {
                                class: "record-delete",
                                title: "Delete user",
                                disabled: deleting == Some(id),
                                onclick: move |_| on_delete.call(id),
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}
