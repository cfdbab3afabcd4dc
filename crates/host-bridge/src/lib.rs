pub mod mock_host;
pub mod selection;
pub mod traits;
pub mod types;

pub use mock_host::MockHost;
pub use selection::SelectionOrderGuard;
pub use traits::*;
pub use types::*;
