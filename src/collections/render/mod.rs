//! Text rendering of heap storage as the binary tree it represents.
//!
//! ```
//! # use elementary_structures::collections::heap::Heap;
//! let heap: Heap<_> = (1..=5).collect();
//! assert_eq!(heap.ascii_tree(), "\
//! 1
//! ├── 2
//! │   ├── 4
//! │   └── 5
//! └── 3");
//! ```

mod renderer;

#[doc(inline)]
pub use renderer::*;
