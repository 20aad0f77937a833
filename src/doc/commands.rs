/*!
# Command Reference

## Arguments and expressions

```text
digits      number in the current radix
+ - * /     arithmetic, left to right (C-like with 2E1)
& #         bitwise and, or
^_          ones complement of the preceding value
( )         grouping
m,n         two arguments
.  B  Z  H  dot, 0, buffer size, and 0,Z
```

With bit 0 of E1 set, these also work inside parentheses:

```text
//  remainder       <<  >>  shifts
<  <=  >  >=        == <> != comparisons, -1 for true
~   exclusive or    !   logical not
```

## Output

```text
n=   n==   n===     print decimal, octal, hexadecimal
:n=                 print with no newline
n^T                 print the character with code n
^Atext^A            print text
```

## Q-registers

```text
nUq      m,nUq      store n, pass m on
Qq       :Qq        value, text length
nQq                 code of character n of the text
%q       n%q        add 1 or n, return the result
^Uqtext$ :^Uq       set, append text
nXq  m,nXq  :Xq     copy buffer lines or characters
Gq   :Gq            insert, print text
[q   ]q   :]q       push, pop, pop with status
Mq   :Mq            run as a macro, without new local registers
.q                  local register q
```

## Flow

```text
n<...>              loop n times, forever with no n
n;  n:;             leave the loop when n >= 0, n < 0
F<  F>              restart loop, next iteration
n"x ... | ... '     conditional with else
F'  F|              flow to end of conditional, to else
!tag!  Otag$        tag and goto
nOa,b,c$            computed goto
!! text             comment to end of line
```

Conditional tests: `A` alphabetic, `C` symbol constituent, `D` digit,
`E` `F` `U` `=` zero, `G` `>` positive, `L` `S` `T` `<` negative,
`N` nonzero, `R` alphanumeric, `V` lowercase, `W` uppercase.

## Edit buffer

```text
Itext$  nI$         insert text, insert character n
nC  nR  nJ  nL      move dot
nD  nK  m,nK        delete
nT  m,nT  nV        type
nA                  code of character at dot+n
n\  \               insert, read a number
```

## Flags and environment

```text
E1 E2 EH ET         read, nE1 set, m,nE1 clear m and set n
^D  ^O  n^R         decimal, octal, set radix
^B  ^H              date, time
^Q  ^Z              lines to move, total text in registers
EO                  version
?                   trace
EIfile$  :EIfile$   run a file
EQqfile$  E%qfile$  read a file into a register, write one out
^C  EX              stop, exit
```
*/
