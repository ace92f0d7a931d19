use error_stack::Report;

use crate::entity::{Volume, VolumeFile, VolumeNumber};
use crate::KernelError;

/// Ordered volumes of a draft. Never empty, and `number` always equals the
/// 1-based position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VolumeList(Vec<Volume>);

impl VolumeList {
    pub fn new() -> Self {
        Self(vec![Volume::new(VolumeNumber::at(0))])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // A list always holds at least one volume.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Volume> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.0.iter()
    }

    pub fn numbers(&self) -> Vec<VolumeNumber> {
        self.0.iter().map(|volume| volume.number).collect()
    }

    /// Appends an empty volume and returns its number.
    pub fn add(&mut self) -> VolumeNumber {
        self.0.push(Volume::new(VolumeNumber::at(self.0.len())));
        self.renumber();
        VolumeNumber::at(self.0.len() - 1)
    }

    /// Returns `false` without touching the list when it holds a single volume
    /// or `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.0.len() <= 1 || index >= self.0.len() {
            return false;
        }
        self.0.remove(index);
        self.renumber();
        true
    }

    pub fn renumber(&mut self) {
        self.0
            .iter_mut()
            .enumerate()
            .for_each(|(index, volume)| volume.number = VolumeNumber::at(index));
    }

    /// Attaches `file` to the volume at `index`. A missing or non-PDF file
    /// leaves the volume without a file and records why.
    pub fn set_file(
        &mut self,
        index: usize,
        file: Option<VolumeFile>,
    ) -> error_stack::Result<(), KernelError> {
        let volume = self.0.get_mut(index).ok_or_else(|| {
            Report::new(KernelError::Invalid)
                .attach_printable(format!("No volume at position {index}"))
        })?;
        let checked = match file {
            None => Err(format!(
                "Select a PDF file for volume {}",
                volume.number.as_ref()
            )),
            Some(file) => file.check_pdf().map(|_| file),
        };
        match checked {
            Ok(file) => {
                volume.file = Some(file);
                volume.validation_error = None;
                Ok(())
            }
            Err(message) => {
                volume.file = None;
                volume.validation_error = Some(message.clone());
                Err(Report::new(KernelError::Invalid).attach_printable(message))
            }
        }
    }

    pub fn can_save(&self) -> bool {
        self.0.iter().all(Volume::is_ready)
    }
}

impl Default for VolumeList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a VolumeList {
    type Item = &'a Volume;
    type IntoIter = std::slice::Iter<'a, Volume>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::VolumeList;
    use crate::entity::{VolumeFile, VolumeNumber};

    fn pdf(name: &str) -> VolumeFile {
        VolumeFile::from_bytes(name, "application/pdf", b"%PDF-1.7".to_vec())
    }

    fn numbers(list: &VolumeList) -> Vec<u32> {
        list.numbers().into_iter().map(u32::from).collect()
    }

    #[test]
    fn starts_with_one_volume() {
        let list = VolumeList::new();
        assert_eq!(numbers(&list), vec![1]);
        assert!(!list.can_save());
    }

    #[test]
    fn removing_the_last_volume_is_a_noop() {
        let mut list = VolumeList::new();
        assert!(!list.remove(0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn removing_the_middle_volume_renumbers() {
        let mut list = VolumeList::new();
        list.add();
        list.add();
        list.set_file(0, Some(pdf("first.pdf"))).unwrap();
        list.set_file(2, Some(pdf("third.pdf"))).unwrap();

        assert!(list.remove(1));

        assert_eq!(numbers(&list), vec![1, 2]);
        let names = list
            .iter()
            .map(|volume| volume.file().as_ref().map(|file| file.name().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![Some("first.pdf".to_string()), Some("third.pdf".to_string())]
        );
    }

    #[test]
    fn add_returns_the_new_number() {
        let mut list = VolumeList::new();
        assert_eq!(list.add(), VolumeNumber::new(2u32));
        assert_eq!(list.add(), VolumeNumber::new(3u32));
    }

    #[test]
    fn out_of_range_removal_is_ignored() {
        let mut list = VolumeList::new();
        list.add();
        assert!(!list.remove(5));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn rejected_file_clears_volume() {
        let mut list = VolumeList::new();
        list.set_file(0, Some(pdf("report.pdf"))).unwrap();

        let rejected = VolumeFile::from_bytes("report.txt", "text/plain", b"hello".to_vec());
        assert!(list.set_file(0, Some(rejected)).is_err());

        let volume = list.get(0).unwrap();
        assert!(volume.file().is_none());
        assert!(volume
            .validation_error()
            .as_ref()
            .is_some_and(|message| !message.is_empty()));
        assert!(!list.can_save());
    }

    #[test]
    fn accepted_file_clears_previous_error() {
        let mut list = VolumeList::new();
        let rejected = VolumeFile::from_bytes("report.txt", "text/plain", vec![]);
        assert!(list.set_file(0, Some(rejected)).is_err());

        list.set_file(0, Some(pdf("report.pdf"))).unwrap();

        let volume = list.get(0).unwrap();
        assert!(volume.file().is_some());
        assert!(volume.validation_error().is_none());
        assert!(list.can_save());
    }

    #[test]
    fn clearing_a_file_is_rejected() {
        let mut list = VolumeList::new();
        list.set_file(0, Some(pdf("report.pdf"))).unwrap();
        assert!(list.set_file(0, None).is_err());
        assert!(list.get(0).unwrap().file().is_none());
    }

    #[test]
    fn can_save_needs_every_volume() {
        let mut list = VolumeList::new();
        list.add();
        list.set_file(0, Some(pdf("a.pdf"))).unwrap();
        assert!(!list.can_save());

        list.set_file(1, Some(pdf("b.pdf"))).unwrap();
        assert!(list.can_save());

        let _ = list.set_file(1, Some(VolumeFile::from_bytes("b.doc", "application/msword", vec![])));
        assert!(!list.can_save());
    }

    #[test]
    fn set_file_out_of_range() {
        let mut list = VolumeList::new();
        assert!(list.set_file(3, Some(pdf("a.pdf"))).is_err());
        assert_eq!(list.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Add), (0usize..8).prop_map(Op::Remove)]
    }

    proptest! {
        #[test]
        fn numbering_stays_contiguous(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut list = VolumeList::new();
            for op in ops {
                match op {
                    Op::Add => { list.add(); }
                    Op::Remove(index) => { list.remove(index); }
                }
                prop_assert!(list.len() >= 1);
                let expected = (1..=list.len() as u32).collect::<Vec<u32>>();
                prop_assert_eq!(numbers(&list), expected);
            }
        }
    }
}
