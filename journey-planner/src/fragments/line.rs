//! Line fragment.

use super::Fragment;
use super::notice::NOTICE;

pub static LINE: Fragment = Fragment {
    name: "lineFields",
    text: "fragment lineFields on Line {
    id
    name
    publicCode
    description
    flexibleLineType
    transportMode
    transportSubmode
    notices {
        ...noticeFields
    }
}
",
    dependencies: &[&NOTICE],
};
