use sxd_document::dom::{ChildOfElement, Document, Element};

pub(crate) trait DocExt<'d> {
    fn root_element(&self) -> Option<Element<'d>>;
}
impl<'d> DocExt<'d> for Document<'d> {
    fn root_element(&self) -> Option<Element<'d>> {
        self.root().children().into_iter().find_map(|c| c.element())
    }
}

pub(crate) trait ElemExt<'d> {
    fn local_name(&self) -> &'d str;
    fn child_elements(&self) -> Vec<Element<'d>>;
    fn direct_text_into(&self, buf: &mut String);

    fn direct_text(&self) -> String {
        let mut buf = String::new();
        self.direct_text_into(&mut buf);
        buf
    }

    fn child_elements_named(&self, name: &str) -> Vec<Element<'d>> {
        self.child_elements()
            .into_iter()
            .filter(|e| e.local_name() == name)
            .collect()
    }
}
impl<'d> ElemExt<'d> for Element<'d> {
    fn local_name(&self) -> &'d str {
        self.name().local_part()
    }

    fn child_elements(&self) -> Vec<Element<'d>> {
        self.children().into_iter().filter_map(|c| c.element()).collect()
    }

    fn direct_text_into(&self, buf: &mut String) {
        for child in self.children() {
            match child {
                ChildOfElement::Text(text) => buf.push_str(text.text()),

                // character data belongs to the element it appears in
                ChildOfElement::Element(_) => {}
                ChildOfElement::Comment(_) => {}
                ChildOfElement::ProcessingInstruction(_) => {}
            }
        }
    }
}
