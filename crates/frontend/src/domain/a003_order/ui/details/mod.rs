mod page;

pub use page::OrderDetailPage;
