use impl_tools::autoimpl;

/// Trait for types that can be aligned.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>)]
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if the object is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the object.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

// ASCII text is aligned byte by byte
impl Alignable for str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }
}
