//! Community board pages.

mod post_detail;
mod post_list;

pub use post_detail::PostDetailView;
pub use post_list::PostList;
