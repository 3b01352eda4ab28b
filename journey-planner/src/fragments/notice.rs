//! Notice fragment.

use super::Fragment;

pub static NOTICE: Fragment = Fragment {
    name: "noticeFields",
    text: "fragment noticeFields on Notice {
    id
    text
    publicCode
}
",
    dependencies: &[],
};
